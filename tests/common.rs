//! Common test utilities for building flowcharts and input records.
use shapeflow::prelude::*;

/// The record most tests evaluate against.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct Movie {
    pub title: String,
    pub length: u32,
    pub release_year: Option<i32>,
}

#[allow(dead_code)]
pub fn movie(title: &str, length: u32, release_year: Option<i32>) -> Movie {
    Movie {
        title: title.to_string(),
        length,
        release_year,
    }
}

/// Two shapes: `A` requires `title` and moves to `B` for titles shorter than ten
/// characters.
///
/// Logic: `len(title) < 10` -> "short", otherwise "long"
#[allow(dead_code)]
pub fn create_title_flowchart() -> Flowchart<Movie, String> {
    Flowchart::builder()
        .shape(
            Shape::new("A", "long".to_string())
                .requires(field!(Movie, title))
                .arrow(Arrow::to("B").when(|m: &Movie| m.title.chars().count() < 10)),
        )
        .shape(Shape::new("B", "short".to_string()))
        .build()
        .expect("title flowchart should be valid")
}

/// A movie validity check spread over several shapes.
///
/// Logic: missing title -> "invalid"; length outside 60..=400 -> "invalid";
/// release year before 1903 or unknown -> "invalid"; otherwise "valid".
#[allow(dead_code)]
pub fn create_validity_flowchart() -> Flowchart<Movie, String> {
    Flowchart::builder()
        .shape(
            Shape::new("check_title", String::new())
                .requires(field!(Movie, title))
                .arrow(Arrow::to("invalid").when(|m: &Movie| m.title.is_empty()))
                .arrow(Arrow::to("check_length").when(|_: &Movie| true)),
        )
        .shape(
            Shape::new("check_length", String::new())
                .requires(field!(Movie, length))
                .arrow(Arrow::to("invalid").when(|m: &Movie| m.length < 60 || m.length > 400))
                .arrow(Arrow::to("check_release").when(|_: &Movie| true)),
        )
        .shape(
            Shape::new("check_release", String::new())
                .requires(field!(Movie, release_year))
                .arrow(
                    Arrow::to("invalid")
                        .when(|m: &Movie| m.release_year.is_none_or(|year| year < 1903)),
                )
                .arrow(Arrow::to("valid").when(|_: &Movie| true)),
        )
        .shape(
            Shape::new("invalid", "invalid".to_string())
                .requires(field!(Movie, title)),
        )
        .shape(Shape::new("valid", "valid".to_string()))
        .build()
        .expect("validity flowchart should be valid")
}

/// The validity flowchart expressed declaratively, with rule names.
#[allow(dead_code)]
pub const VALIDITY_DEFINITION_JSON: &str = r#"{
    "shapes": [
        {
            "name": "check_title",
            "required_field": "title",
            "result": "",
            "arrows": [
                { "points_to": "invalid", "rule": "title_missing" },
                { "points_to": "check_length", "rule": "always" }
            ]
        },
        {
            "name": "check_length",
            "required_field": "length",
            "result": "",
            "arrows": [
                { "points_to": "invalid", "rule": "length_out_of_range" },
                { "points_to": "valid", "rule": "always" }
            ]
        },
        { "name": "invalid", "result": "invalid" },
        { "name": "valid", "result": "valid" }
    ],
    "options": { "max_steps": 16 }
}"#;

#[allow(dead_code)]
pub fn create_movie_registry() -> RuleRegistry<Movie> {
    RuleRegistry::default()
        .with("title_missing", |m: &Movie| m.title.is_empty())
        .with("length_out_of_range", |m: &Movie| {
            m.length < 60 || m.length > 400
        })
}
