use super::dto::{SeasonalFood, SeasonalFoods};
use super::repo_types::{Season, SeasonFood};
use crate::foods::repo::{find_food_by_name, get_food};
use crate::foods::repo_types::FoodItem;

/// Every listed name is kept, catalogued or not, in the season's order.
pub fn seasonal_foods(season: &'static Season) -> SeasonalFoods {
    let foods = season
        .foods
        .iter()
        .map(|entry| SeasonalFood {
            name: entry.name,
            food: resolve(entry),
        })
        .collect();
    SeasonalFoods { season, foods }
}

/// An explicit link wins; otherwise fall back to a name match.
fn resolve(entry: &SeasonFood) -> Option<&'static FoodItem> {
    match entry.food_id {
        Some(id) => get_food(id),
        None => find_food_by_name(entry.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::repo_types::Energy;
    use crate::seasons::repo::get_season;

    fn linked(season_id: &str) -> Vec<(&'static str, Option<&'static str>)> {
        seasonal_foods(get_season(season_id).unwrap())
            .foods
            .iter()
            .map(|f| (f.name, f.food.map(|food| food.id)))
            .collect()
    }

    #[test]
    fn resolves_catalogued_names_and_keeps_the_rest() {
        let summer = get_season("summer").unwrap();
        let resolved = seasonal_foods(summer);
        assert_eq!(resolved.foods.len(), summer.foods.len());

        let names: Vec<_> = resolved.foods.iter().map(|f| f.name).collect();
        let listed: Vec<_> = summer.foods.iter().map(|f| f.name).collect();
        assert_eq!(names, listed);

        let catalogued: Vec<_> = resolved
            .foods
            .iter()
            .filter_map(|f| f.food.map(|food| food.id))
            .collect();
        assert_eq!(catalogued, ["watermelon", "cucumber", "mint"]);
    }

    #[test]
    fn plural_display_names_link_to_catalog() {
        let autumn = linked("autumn");
        assert!(autumn.contains(&("Apples", Some("apple"))));
        assert!(autumn.contains(&("Sweet Potato", Some("sweet_potato"))));
        assert!(autumn.contains(&("Ginger", Some("ginger"))));
        assert!(autumn.contains(&("Pumpkin", None)));

        let winter = linked("winter");
        assert!(winter.contains(&("Walnuts", Some("walnut"))));
        assert!(winter.contains(&("Cinnamon", Some("cinnamon"))));
    }

    #[test]
    fn winter_walnuts_are_warm() {
        let winter = seasonal_foods(get_season("winter").unwrap());
        let walnut = winter
            .foods
            .iter()
            .find(|f| f.name == "Walnuts")
            .and_then(|f| f.food)
            .unwrap();
        assert_eq!(walnut.energy, Energy::Warm);
    }
}
