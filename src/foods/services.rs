use rand::Rng;

use super::repo::FOODS;
use super::repo_types::FoodItem;
use crate::combinations::{repo::RECIPES, repo_types::Recipe};

/// The scanner stand-in: a uniform pick from the food catalog.
pub fn detect_food<R: Rng + ?Sized>(rng: &mut R) -> &'static FoodItem {
    &FOODS[rng.gen_range(0..FOODS.len())]
}

/// Recipes with an ingredient line mentioning the food, catalog order.
pub fn recipes_for_food(food: &FoodItem) -> Vec<&'static Recipe> {
    let name = food.name.to_lowercase();
    RECIPES
        .iter()
        .filter(|r| r.ingredients.iter().any(|line| line.to_lowercase().contains(&name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::repo::get_food;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn ginger_appears_in_warming_and_safety_recipes() {
        let ginger = get_food("ginger").unwrap();
        let ids: Vec<_> = recipes_for_food(ginger).iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            ["lamb-stew", "balanced-bowl", "digestive-congee", "safe-seafood", "pregnancy-safe"]
        );
    }

    #[test]
    fn food_without_recipes_is_empty() {
        let watermelon = get_food("watermelon").unwrap();
        assert!(recipes_for_food(watermelon).is_empty());
    }

    #[test]
    fn detection_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..2_000).map(|_| detect_food(&mut rng).id).collect();
        assert_eq!(seen.len(), FOODS.len());
    }
}
