use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Surface categories a paint product can be rated for.
///
/// The set is closed on purpose: room inputs pick one of these per painted
/// surface, and the active [`PresetConfig`] carries a [`MaterialRate`] for
/// each variant it knows how to price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintSurface {
    StandardWalls,
    DurableWalls,
    Ceiling,
    Woodwork,
    DoorFrame,
    WindowFrame,
    Radiator,
    Other,
}

impl PaintSurface {
    /// All variants, in catalog display order.
    pub const ALL: [PaintSurface; 8] = [
        PaintSurface::StandardWalls,
        PaintSurface::DurableWalls,
        PaintSurface::Ceiling,
        PaintSurface::Woodwork,
        PaintSurface::DoorFrame,
        PaintSurface::WindowFrame,
        PaintSurface::Radiator,
        PaintSurface::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaintSurface::StandardWalls => "Standard walls",
            PaintSurface::DurableWalls => "Durable walls",
            PaintSurface::Ceiling => "Ceiling",
            PaintSurface::Woodwork => "Woodwork",
            PaintSurface::DoorFrame => "Door frame",
            PaintSurface::WindowFrame => "Window frame",
            PaintSurface::Radiator => "Radiator",
            PaintSurface::Other => "Other",
        }
    }
}

/// How much a litre of product covers and what it costs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRate {
    /// Area (m²) or length (m) one litre covers per coat.
    pub coverage_per_litre: f64,
    pub cost_per_litre: f64,
}

/// Unit a labour task is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabourUnit {
    Area,
    Length,
    Item,
    Hour,
}

/// Hours of labour a task takes per unit per coat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabourRate {
    pub unit: LabourUnit,
    pub hours_per_unit_per_coat: f64,
}

/// The active pricing preset: material and labour rates, misc costs, and the
/// commercial knobs (contingencies, markup, VAT applicability).
///
/// A preset is never mutated by quoting. Hosts edit it through the validated
/// setters in the catalog module; deserialized presets are checked with
/// [`PresetConfig::validate`](crate::domain::catalog) before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub name: String,
    pub materials: HashMap<PaintSurface, MaterialRate>,
    /// Labour rates keyed by task. Missing keys price as zero hours.
    pub labour: HashMap<String, LabourRate>,
    /// Flat or per-unit costs not tied to paint volume, keyed by cost name.
    pub misc_costs: HashMap<String, f64>,
    pub markup_percent: f64,
    pub vat_applicable: bool,
    pub material_contingency_percent: f64,
    pub labour_contingency_percent: f64,
    pub default_crew_size: u32,
    pub hourly_charge_rate: f64,
}

impl PresetConfig {
    /// Misc rate for `key`, or zero when the key is absent.
    pub fn misc_rate(&self, key: &str) -> f64 {
        self.misc_costs.get(key).copied().unwrap_or(0.0)
    }
}

/// One room as entered by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    #[serde(default = "new_room_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub wall_area: f64,
    #[serde(default)]
    pub ceiling_area: f64,
    #[serde(default)]
    pub woodwork_length: f64,
    #[serde(default)]
    pub door_count: u32,
    #[serde(default)]
    pub window_count: u32,
    #[serde(default = "one_coat")]
    pub coats_walls: u32,
    #[serde(default = "one_coat")]
    pub coats_ceiling: u32,
    #[serde(default = "one_coat")]
    pub coats_woodwork: u32,
    #[serde(default = "one_coat")]
    pub coats_doors: u32,
    #[serde(default = "one_coat")]
    pub coats_windows: u32,
    /// Product chosen for the walls; must name a rated surface to be priced.
    #[serde(default = "default_wall_paint")]
    pub wall_paint: PaintSurface,
    #[serde(default = "default_ceiling_paint")]
    pub ceiling_paint: PaintSurface,
    #[serde(default = "default_woodwork_paint")]
    pub woodwork_paint: PaintSurface,
    #[serde(default)]
    pub heavy_prep: bool,
    #[serde(default)]
    pub wallpaper_removal_area: f64,
    #[serde(default)]
    pub notes: String,
}

fn new_room_id() -> String {
    Uuid::new_v4().to_string()
}

fn one_coat() -> u32 {
    1
}

fn default_wall_paint() -> PaintSurface {
    PaintSurface::StandardWalls
}

fn default_ceiling_paint() -> PaintSurface {
    PaintSurface::Ceiling
}

fn default_woodwork_paint() -> PaintSurface {
    PaintSurface::Woodwork
}

impl RoomInput {
    /// Fresh empty room with a generated id and one coat everywhere.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_room_id(),
            name: name.into(),
            wall_area: 0.0,
            ceiling_area: 0.0,
            woodwork_length: 0.0,
            door_count: 0,
            window_count: 0,
            coats_walls: 1,
            coats_ceiling: 1,
            coats_woodwork: 1,
            coats_doors: 1,
            coats_windows: 1,
            wall_paint: PaintSurface::StandardWalls,
            ceiling_paint: PaintSurface::Ceiling,
            woodwork_paint: PaintSurface::Woodwork,
            heavy_prep: false,
            wallpaper_removal_area: 0.0,
            notes: String::new(),
        }
    }
}

/// Priced breakdown for a single room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomQuote {
    pub room_id: String,
    pub room_name: String,
    /// Paint volume across all surfaces, for the estimate view.
    pub paint_litres: f64,
    /// Labour hours after the contingency buffer.
    pub labour_hours: f64,
    pub materials_cost: f64,
    pub labour_cost: f64,
    pub total_cost: f64,
}

/// Full job breakdown across all rooms plus add-ons, markup and VAT.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobQuote {
    pub room_breakdowns: Vec<RoomQuote>,
    pub total_paint_litres: f64,
    pub total_labour_hours: f64,
    pub total_materials_cost: f64,
    pub total_labour_cost: f64,
    pub total_add_ons_cost: f64,
    pub sub_total_before_markup: f64,
    pub markup_amount: f64,
    pub total_before_vat: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
}
