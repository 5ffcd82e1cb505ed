//! Integration tests for job-level quoting behaviour.

use serde_json::{json, Map, Value};

use quote_builder::domain::{quote_job, quote_room, PresetConfig, RoomInput};

fn furnished_room(name: &str) -> RoomInput {
    let mut room = RoomInput::new(name);
    room.wall_area = 28.0;
    room.ceiling_area = 12.0;
    room.woodwork_length = 14.0;
    room.door_count = 1;
    room.window_count = 2;
    room.coats_walls = 2;
    room.coats_ceiling = 1;
    room.coats_woodwork = 2;
    room.coats_doors = 2;
    room.coats_windows = 2;
    room
}

#[test]
fn empty_job_totals_are_zero() {
    let quote = quote_job(&[], &PresetConfig::default(), None);

    assert!(quote.room_breakdowns.is_empty());
    assert_eq!(quote.total_materials_cost, 0.0);
    assert_eq!(quote.total_labour_cost, 0.0);
    assert_eq!(quote.total_add_ons_cost, 0.0);
    assert_eq!(quote.sub_total_before_markup, 0.0);
    assert_eq!(quote.markup_amount, 0.0);
    assert_eq!(quote.total_before_vat, 0.0);
    assert_eq!(quote.vat_amount, 0.0);
    assert_eq!(quote.grand_total, 0.0);
}

#[test]
fn single_room_breakdown_matches_quote_room() {
    let config = PresetConfig::default();
    let room = furnished_room("Lounge");

    let job = quote_job(std::slice::from_ref(&room), &config, None);

    assert_eq!(job.room_breakdowns.len(), 1);
    assert_eq!(job.room_breakdowns[0], quote_room(&room, &config));
    assert_eq!(job.total_materials_cost, job.room_breakdowns[0].materials_cost);
    assert_eq!(job.total_labour_cost, job.room_breakdowns[0].labour_cost);
}

#[test]
fn breakdowns_preserve_room_order() {
    let config = PresetConfig::default();
    let rooms = vec![
        furnished_room("Hall"),
        furnished_room("Lounge"),
        furnished_room("Kitchen"),
    ];

    let job = quote_job(&rooms, &config, None);

    let names: Vec<&str> = job
        .room_breakdowns
        .iter()
        .map(|r| r.room_name.as_str())
        .collect();
    assert_eq!(names, ["Hall", "Lounge", "Kitchen"]);
}

#[test]
fn markup_is_exactly_percent_of_subtotal() {
    let mut config = PresetConfig::default();
    config.markup_percent = 20.0;
    config.vat_applicable = false;
    let rooms = vec![furnished_room("Lounge"), furnished_room("Bedroom")];

    let job = quote_job(&rooms, &config, None);

    let subtotal = job.total_materials_cost + job.total_labour_cost + job.total_add_ons_cost;
    let expected = (subtotal * 20.0 / 100.0 * 100.0).round() / 100.0;
    assert_eq!(job.markup_amount, expected);
    assert!(job.grand_total >= job.sub_total_before_markup);
}

#[test]
fn non_numeric_add_ons_are_ignored() {
    let mut config = PresetConfig::default();
    config.vat_applicable = false;
    config.markup_percent = 0.0;

    let mut add_ons = Map::new();
    add_ons.insert("scaffolding".to_string(), json!(150.0));
    add_ons.insert("waste removal".to_string(), json!(45.5));
    add_ons.insert("access notes".to_string(), json!("rear lane only"));
    add_ons.insert("confirmed".to_string(), json!(true));

    let job = quote_job(&[], &config, Some(&add_ons));

    assert_eq!(job.total_add_ons_cost, 195.5);
    assert_eq!(job.grand_total, 195.5);
}

#[test]
fn add_on_job_applies_markup_and_vat() {
    let mut config = PresetConfig::default();
    config.markup_percent = 10.0;
    config.vat_applicable = true;

    let mut add_ons = Map::new();
    add_ons.insert("scaffolding".to_string(), Value::from(100.0));

    let job = quote_job(&[], &config, Some(&add_ons));

    assert_eq!(job.sub_total_before_markup, 100.0);
    assert_eq!(job.markup_amount, 10.0);
    assert_eq!(job.total_before_vat, 110.0);
    assert_eq!(job.vat_amount, 22.0);
    assert_eq!(job.grand_total, 132.0);
}

#[test]
fn more_coats_never_price_lower_across_the_job() {
    let config = PresetConfig::default();
    let mut cheap = furnished_room("Lounge");
    cheap.coats_windows = 1;
    let mut dear = cheap.clone();
    dear.coats_windows = 3;

    let cheap_job = quote_job(std::slice::from_ref(&cheap), &config, None);
    let dear_job = quote_job(std::slice::from_ref(&dear), &config, None);

    assert!(dear_job.total_materials_cost > cheap_job.total_materials_cost);
    assert!(dear_job.total_labour_cost > cheap_job.total_labour_cost);
    assert!(dear_job.grand_total > cheap_job.grand_total);
}
