// ABOUTME: Integration tests for the listing helpers rendered through the public API
// ABOUTME: Covers full listing templates, custom humanizers and escaping behaviour

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::{Arc, Mutex};

use sliceview::template::TemplateError;
use sliceview::{
    register_helpers, RelativeTimeHumanizer, RenderOptions, TemplateEngine, TimeHumanizer,
    TipPosition,
};

mod common;
use common::{ListingBuilder, LISTING_TEMPLATE, NOW};

fn pinned_engine() -> TemplateEngine {
    let now: DateTime<Utc> = NOW.parse().unwrap();
    TemplateEngine::with_humanizer(
        &RenderOptions::default(),
        Arc::new(RelativeTimeHumanizer::at(now)),
    )
}

/// Records every value handed to it and answers with a fixed sentinel
#[derive(Default)]
struct RecordingHumanizer {
    calls: Mutex<Vec<f64>>,
}

impl TimeHumanizer for RecordingHumanizer {
    fn humanize(&self, millis: f64) -> String {
        self.calls.lock().unwrap().push(millis);
        "<em>sentinel</em>".to_string()
    }
}

#[test]
fn test_render_full_listing() {
    let engine = pinned_engine();
    let listing = ListingBuilder::new("Tonight")
        .add_pizza("Margherita", "Dominos", 11.5, 5)
        .add_pizza("Pepperoni", "Papa Johns", 13.999, 180);

    let result = engine
        .render_template(LISTING_TEMPLATE, &listing.to_json())
        .unwrap();

    assert!(result.contains("<h1>Tonight</h1>"));
    assert!(result.contains("Margherita (Dominos) $11.50"));
    assert!(result.contains("Pepperoni (Papa Johns) $14.00"));
    assert!(result.contains("<small>5 minutes ago</small>"));
    assert!(result.contains("<small>3 hours ago</small>"));
    assert_eq!(result.matches("hint--right hint--bounce").count(), 2);
    assert_eq!(
        result
            .matches("data-hint=\"Price for a 14 inch pie\"")
            .count(),
        2
    );
}

#[test]
fn test_listing_data_is_escaped_but_helpers_are_not() {
    let engine = pinned_engine();
    let listing = ListingBuilder::new("<script>x</script>").add_pizza("Veggie", "Dominos", 9.0, 1);

    let result = engine
        .render_template(LISTING_TEMPLATE, &listing.to_json())
        .unwrap();

    assert!(result.contains("<h1>&lt;script&gt;x&lt;/script&gt;</h1>"));
    assert!(result.contains("<i class=\"fa fa-question-circle\"></i>"));
}

#[test]
fn test_elapsed_delegates_to_injected_humanizer() {
    let humanizer = Arc::new(RecordingHumanizer::default());
    let engine = TemplateEngine::with_humanizer(&RenderOptions::default(), humanizer.clone());

    let result = engine
        .render_template("{{elapsed a}}|{{elapsed b}}", &json!({"a": 12, "b": 0.25}))
        .unwrap();

    assert_eq!(result, "<em>sentinel</em>|<em>sentinel</em>");
    assert_eq!(*humanizer.calls.lock().unwrap(), vec![12000.0, 250.0]);
}

#[test]
fn test_register_helpers_on_host_registry() {
    let mut handlebars = handlebars::Handlebars::new();
    register_helpers(
        &mut handlebars,
        Arc::new(|_: f64| "moments ago".to_string()),
        TipPosition::Left,
    );

    let result = handlebars
        .render_template(
            "{{decimal 2.005}} {{tip \"nowhere\" \"?\"}} {{elapsed 1}}",
            &json!({}),
        )
        .unwrap();
    assert!(result.starts_with("2.00 <span class=\"sl-hint hint--left hint--bounce\""));
    assert!(result.ends_with(" moments ago"));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = Arc::new(pinned_engine());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .render_template("{{decimal value}}", &json!({ "value": i as f64 + 0.5 }))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["0.50", "1.50", "2.50", "3.50"]);
}

#[test]
fn test_syntax_errors_are_reported() {
    let engine = TemplateEngine::default();
    let result = engine.validate_template("{{decimal price}");
    assert!(matches!(result, Err(TemplateError::SyntaxError(_))));
}
