//! Fixture trees shared by the engine tests

use contracts::domain::a001_taxonomy::{
    CategorySeed, OptionSeed, ParameterSeed, SubCategorySeed, Taxonomy,
};

use super::store;

pub(crate) const SAMSUNG: &str = "opt-samsung";
pub(crate) const APPLE: &str = "opt-apple";

fn option(id: &str, value: &str) -> OptionSeed {
    OptionSeed::Record {
        id: Some(id.to_string()),
        value: value.to_string(),
    }
}

fn parameter(name: &str, options: Vec<OptionSeed>) -> ParameterSeed {
    ParameterSeed {
        name: name.to_string(),
        slug: None,
        options,
    }
}

fn sub_category(name: &str, parameters: Vec<ParameterSeed>) -> SubCategorySeed {
    SubCategorySeed {
        name: name.to_string(),
        slug: None,
        parameters,
    }
}

fn category(name: &str, sub_categories: Vec<SubCategorySeed>) -> CategorySeed {
    CategorySeed {
        name: name.to_string(),
        slug: None,
        sub_categories,
    }
}

/// Electronics → Mobile Phones → Brand → [Samsung, Apple]
pub(crate) fn scenario_seed() -> Vec<CategorySeed> {
    vec![category(
        "Electronics",
        vec![sub_category(
            "Mobile Phones",
            vec![parameter(
                "Brand",
                vec![option(SAMSUNG, "Samsung"), option(APPLE, "Apple")],
            )],
        )],
    )]
}

/// Scenario tree plus the ids of its two options (Samsung, Apple)
pub(crate) fn scenario_tree() -> (Taxonomy, String, String) {
    (
        store::initialize(scenario_seed()),
        SAMSUNG.to_string(),
        APPLE.to_string(),
    )
}

/// Дерево с несколькими ветками на каждом уровне
pub(crate) fn marketplace_tree() -> Taxonomy {
    store::initialize(vec![
        category(
            "Electronics",
            vec![
                sub_category(
                    "Mobile Phones",
                    vec![
                        parameter(
                            "Brand",
                            vec![option("mp-samsung", "Samsung"), option("mp-apple", "Apple")],
                        ),
                        parameter(
                            "Storage",
                            vec![option("mp-64", "64GB"), option("mp-128", "128GB")],
                        ),
                    ],
                ),
                sub_category(
                    "Laptops",
                    vec![parameter(
                        "Brand",
                        vec![option("lp-apple", "Apple"), option("lp-dell", "Dell")],
                    )],
                ),
                sub_category("Cameras", vec![]),
            ],
        ),
        category(
            "Vehicles",
            vec![sub_category(
                "Cars",
                vec![parameter(
                    "Fuel Type",
                    vec![option("car-petrol", "Petrol"), option("car-diesel", "Diesel")],
                )],
            )],
        ),
        category("Property", vec![]),
    ])
}
