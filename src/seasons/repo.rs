use crate::catalog::get_by_id;

use super::repo_types::{Season, SeasonColors, SeasonFood};

pub static SEASONS: &[Season] = &[
    Season {
        id: "spring",
        name: "Spring",
        subtitle: "Renewal & Growth",
        description: "Time for fresh greens and liver cleansing foods",
        colors: SeasonColors {
            primary: "#52c41a",
            secondary: "#95de64",
            accent: "#237804",
        },
        emoji: "🌸",
        months: "March - May",
        image: "images/spring.png",
        foods: &[
            SeasonFood::named("Spinach"),
            SeasonFood::named("Asparagus"),
            SeasonFood::named("Peas"),
            SeasonFood::named("Artichokes"),
            SeasonFood::named("Green Tea"),
            SeasonFood::named("Mint"),
        ],
    },
    Season {
        id: "summer",
        name: "Summer",
        subtitle: "Energy & Vitality",
        description: "Cooling foods to balance the heat",
        colors: SeasonColors {
            primary: "#fa8c16",
            secondary: "#ffc53d",
            accent: "#d46b08",
        },
        emoji: "☀️",
        months: "June - August",
        image: "images/summer.png",
        foods: &[
            SeasonFood::named("Watermelon"),
            SeasonFood::named("Cucumber"),
            SeasonFood::named("Tomatoes"),
            SeasonFood::named("Peaches"),
            SeasonFood::named("Mint"),
            SeasonFood::named("Coconut"),
        ],
    },
    Season {
        id: "autumn",
        name: "Autumn",
        subtitle: "Harvest & Balance",
        description: "Nourishing foods to prepare for winter",
        colors: SeasonColors {
            primary: "#d4380d",
            secondary: "#ff7a45",
            accent: "#871400",
        },
        emoji: "🍂",
        months: "September - November",
        image: "images/autumn.png",
        foods: &[
            SeasonFood::named("Pumpkin"),
            SeasonFood::named("Sweet Potato"),
            SeasonFood::linked("Apples", "apple"),
            SeasonFood::named("Pears"),
            SeasonFood::named("Mushrooms"),
            SeasonFood::named("Ginger"),
        ],
    },
    Season {
        id: "winter",
        name: "Winter",
        subtitle: "Rest & Restoration",
        description: "Warming foods to maintain inner heat",
        colors: SeasonColors {
            primary: "#1890ff",
            secondary: "#69c0ff",
            accent: "#0050b3",
        },
        emoji: "❄️",
        months: "December - February",
        image: "images/winter.png",
        foods: &[
            SeasonFood::named("Root Vegetables"),
            SeasonFood::named("Bone Broth"),
            SeasonFood::named("Black Beans"),
            SeasonFood::linked("Walnuts", "walnut"),
            SeasonFood::named("Cinnamon"),
            SeasonFood::named("Garlic"),
        ],
    },
];

pub fn list_seasons() -> &'static [Season] {
    SEASONS
}

pub fn get_season(id: &str) -> Option<&'static Season> {
    get_by_id(SEASONS, id)
}
