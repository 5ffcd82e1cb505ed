//! Room and job quote computation.
//!
//! Both functions are pure: they read the room inputs and the active preset
//! and never mutate either. A surface or task whose rate key is absent from
//! the preset contributes zero, so a partially configured preset still
//! produces a usable quote.

use serde_json::{Map, Value};

use super::catalog::{misc, task, VAT_RATE_PERCENT};
use super::entities::{JobQuote, PresetConfig, RoomInput, RoomQuote};

/// Round to 2 decimal places of currency.
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Litres needed for one surface. Zero coverage prices as zero litres rather
/// than dividing by zero.
fn surface_litres(measurement: f64, coats: u32, coverage_per_litre: f64) -> f64 {
    if coverage_per_litre > 0.0 {
        measurement * f64::from(coats) / coverage_per_litre
    } else {
        0.0
    }
}

/// Hours for one labour task, or zero when the key is unrated or the
/// measurement is not positive.
fn task_hours(config: &PresetConfig, key: &str, measurement: f64, coats: u32) -> f64 {
    if measurement <= 0.0 || coats == 0 {
        return 0.0;
    }
    config
        .labour
        .get(key)
        .map_or(0.0, |rate| measurement * f64::from(coats) * rate.hours_per_unit_per_coat)
}

/// Price one room against the active preset.
pub fn quote_room(room: &RoomInput, config: &PresetConfig) -> RoomQuote {
    let mut litres = 0.0;
    let mut paint_cost = 0.0;

    let painted_surfaces = [
        (room.wall_area, room.coats_walls, room.wall_paint),
        (room.ceiling_area, room.coats_ceiling, room.ceiling_paint),
        (room.woodwork_length, room.coats_woodwork, room.woodwork_paint),
    ];
    for (measurement, coats, choice) in painted_surfaces {
        if measurement <= 0.0 || coats == 0 {
            continue;
        }
        let Some(rate) = config.materials.get(&choice) else {
            continue;
        };
        let needed = surface_litres(measurement, coats, rate.coverage_per_litre);
        litres += needed;
        paint_cost += needed * rate.cost_per_litre;
    }

    let door_cost =
        f64::from(room.door_count) * f64::from(room.coats_doors) * config.misc_rate(misc::DOOR_UNIT);
    let window_cost = f64::from(room.window_count)
        * f64::from(room.coats_windows)
        * config.misc_rate(misc::WINDOW_UNIT);

    let prep_area = room.wall_area + room.ceiling_area;
    let prep_misc_key = if room.heavy_prep {
        misc::PREP_HEAVY
    } else {
        misc::PREP_GENERAL
    };
    let prep_cost = prep_area * config.misc_rate(prep_misc_key);

    let base_materials =
        paint_cost + door_cost + window_cost + prep_cost + config.misc_rate(misc::SUNDRIES);
    let buffered_materials =
        base_materials * (1.0 + config.material_contingency_percent / 100.0);

    let mut hours = 0.0;
    hours += task_hours(config, task::PAINT_WALLS, room.wall_area, room.coats_walls);
    hours += task_hours(config, task::PAINT_CEILING, room.ceiling_area, room.coats_ceiling);
    hours += task_hours(
        config,
        task::PAINT_WOODWORK,
        room.woodwork_length,
        room.coats_woodwork,
    );
    hours += task_hours(
        config,
        task::PAINT_DOOR,
        f64::from(room.door_count),
        room.coats_doors,
    );
    hours += task_hours(
        config,
        task::PAINT_WINDOW,
        f64::from(room.window_count),
        room.coats_windows,
    );
    // Stripping and prep are priced once over the area, regardless of coats.
    hours += task_hours(config, task::STRIP_WALLPAPER, room.wallpaper_removal_area, 1);
    let prep_task_key = if room.heavy_prep {
        task::PREP_HEAVY
    } else {
        task::PREP_GENERAL
    };
    hours += task_hours(config, prep_task_key, prep_area, 1);

    let buffered_hours = hours * (1.0 + config.labour_contingency_percent / 100.0);
    let labour_cost = buffered_hours * config.hourly_charge_rate;

    let materials_cost = round_currency(buffered_materials);
    let labour_cost = round_currency(labour_cost);

    RoomQuote {
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        paint_litres: round_currency(litres),
        labour_hours: round_currency(buffered_hours),
        materials_cost,
        labour_cost,
        total_cost: round_currency(materials_cost + labour_cost),
    }
}

/// Price a whole job: every room in order, plus named add-ons, markup and VAT.
///
/// Add-on values may be arbitrary JSON; non-numeric values are ignored. The
/// markup is taken from the unrounded subtotal, and VAT at the fixed
/// [`VAT_RATE_PERCENT`] only when the preset says it applies.
pub fn quote_job(
    rooms: &[RoomInput],
    config: &PresetConfig,
    add_ons: Option<&Map<String, Value>>,
) -> JobQuote {
    let room_breakdowns: Vec<RoomQuote> =
        rooms.iter().map(|room| quote_room(room, config)).collect();

    let total_paint_litres: f64 = room_breakdowns.iter().map(|quote| quote.paint_litres).sum();
    let total_labour_hours: f64 = room_breakdowns.iter().map(|quote| quote.labour_hours).sum();
    let total_materials: f64 = room_breakdowns.iter().map(|quote| quote.materials_cost).sum();
    let total_labour: f64 = room_breakdowns.iter().map(|quote| quote.labour_cost).sum();

    let total_add_ons: f64 = add_ons
        .map(|costs| costs.values().filter_map(Value::as_f64).sum())
        .unwrap_or(0.0);

    let sub_total = total_materials + total_labour + total_add_ons;
    let markup = sub_total * config.markup_percent / 100.0;
    let total_before_vat = sub_total + markup;
    let vat = if config.vat_applicable {
        total_before_vat * VAT_RATE_PERCENT / 100.0
    } else {
        0.0
    };

    JobQuote {
        room_breakdowns,
        total_paint_litres: round_currency(total_paint_litres),
        total_labour_hours: round_currency(total_labour_hours),
        total_materials_cost: round_currency(total_materials),
        total_labour_cost: round_currency(total_labour),
        total_add_ons_cost: round_currency(total_add_ons),
        sub_total_before_markup: round_currency(sub_total),
        markup_amount: round_currency(markup),
        total_before_vat: round_currency(total_before_vat),
        vat_amount: round_currency(vat),
        grand_total: round_currency(total_before_vat + vat),
    }
}
