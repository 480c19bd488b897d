use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::settings::SettingsOverride;

/// Raw appraisal request in the shape the appraisal form submits it. Numeric
/// fields arrive as strings and are validated during intake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppraisalSubmission {
    pub vehicle: VehicleInput,
    #[serde(default)]
    pub condition: ConditionInput,
    #[serde(default)]
    pub history: HistoryInput,
    #[serde(default)]
    pub settings: SettingsOverride,
}

/// Free-text vehicle fields exactly as typed or prefilled from a VIN decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleInput {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub trim: String,
    #[serde(default)]
    pub kilometers: String,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub msrp: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub transmission: String,
}

/// Inspection findings recorded on the lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionInput {
    #[serde(default = "default_grade")]
    pub naaa_grade: u8,
    #[serde(default)]
    pub brake_pad_mm: Option<f32>,
    #[serde(default)]
    pub tire_tread_mm: Option<f32>,
    #[serde(default)]
    pub check_engine_light: bool,
    #[serde(default)]
    pub rough_idle: bool,
    #[serde(default)]
    pub excessive_smoke: bool,
    #[serde(default)]
    pub transmission_slipping: bool,
    #[serde(default)]
    pub rust: RustLevel,
    #[serde(default)]
    pub repairs: Vec<RepairItem>,
}

fn default_grade() -> u8 {
    3
}

impl Default for ConditionInput {
    fn default() -> Self {
        Self {
            naaa_grade: default_grade(),
            brake_pad_mm: None,
            tire_tread_mm: None,
            check_engine_light: false,
            rough_idle: false,
            excessive_smoke: false,
            transmission_slipping: false,
            rust: RustLevel::None,
            repairs: Vec::new(),
        }
    }
}

/// Title and usage history as reported by the history provider or the seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryInput {
    #[serde(default)]
    pub title_type: TitleType,
    #[serde(default)]
    pub accident_level: AccidentLevel,
    #[serde(default)]
    pub accident_count: u8,
    #[serde(default)]
    pub odometer_tampering: bool,
    #[serde(default)]
    pub active_recalls: bool,
    #[serde(default)]
    pub frame_damage: bool,
    #[serde(default)]
    pub frame_damage_repaired: bool,
    #[serde(default)]
    pub stolen: bool,
    #[serde(default)]
    pub previous_rental: bool,
    #[serde(default)]
    pub previous_taxi: bool,
    #[serde(default)]
    pub missing_service_records: bool,
    #[serde(default)]
    pub specialty_vehicle: bool,
    #[serde(default)]
    pub bc_alberta_history: bool,
    #[serde(default = "default_owner_count")]
    pub owner_count: u8,
}

fn default_owner_count() -> u8 {
    1
}

impl Default for HistoryInput {
    fn default() -> Self {
        Self {
            title_type: TitleType::Clean,
            accident_level: AccidentLevel::None,
            accident_count: 0,
            odometer_tampering: false,
            active_recalls: false,
            frame_damage: false,
            frame_damage_repaired: false,
            stolen: false,
            previous_rental: false,
            previous_taxi: false,
            missing_service_records: false,
            specialty_vehicle: false,
            bc_alberta_history: false,
            owner_count: default_owner_count(),
        }
    }
}

/// Validated vehicle identity after intake. Optional fields stay `None` when
/// the submission left them blank so each valuation step can degrade to a
/// no-op instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleFacts {
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub trim: Option<String>,
    pub kilometers: f64,
    pub body_type: Option<BodyType>,
    pub province: Option<Province>,
    pub msrp: Option<f64>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
}

impl VehicleFacts {
    /// Whole years since the model year, floored at zero. `None` when the
    /// model year was not supplied.
    pub fn age_years(&self, as_of: NaiveDate) -> Option<i32> {
        self.year.map(|year| (as_of.year() - year).max(0))
    }
}

/// Validated inspection facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionFacts {
    pub grade: NaaaGrade,
    pub brake_pad_mm: Option<f32>,
    pub tire_tread_mm: Option<f32>,
    pub check_engine_light: bool,
    pub rough_idle: bool,
    pub excessive_smoke: bool,
    pub transmission_slipping: bool,
    pub rust: RustLevel,
    pub repairs: Vec<RepairItem>,
}

impl ConditionFacts {
    /// Drivetrain symptoms that together push a unit to the wholesale lane.
    /// The check engine light is tracked separately.
    pub fn mechanical_symptoms(&self) -> Vec<&'static str> {
        let mut symptoms = Vec::new();
        if self.rough_idle {
            symptoms.push("rough idle");
        }
        if self.excessive_smoke {
            symptoms.push("excessive exhaust smoke");
        }
        if self.transmission_slipping {
            symptoms.push("transmission slipping");
        }
        symptoms
    }
}

/// Validated history facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryFacts {
    pub title_type: TitleType,
    pub accident_level: AccidentLevel,
    pub accident_count: u8,
    pub odometer_tampering: bool,
    pub active_recalls: bool,
    pub frame_damage: bool,
    pub frame_damage_repaired: bool,
    pub stolen: bool,
    pub previous_rental: bool,
    pub previous_taxi: bool,
    pub missing_service_records: bool,
    pub specialty_vehicle: bool,
    pub bc_alberta_history: bool,
    pub owner_count: u8,
}

/// Everything the engine needs for one appraisal, already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalInput {
    pub vehicle: VehicleFacts,
    pub condition: ConditionFacts,
    pub history: HistoryFacts,
}

/// NAAA condition grade on the 0 (inoperative) to 5 (excellent) auction scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NaaaGrade(u8);

impl NaaaGrade {
    pub const INOPERATIVE: NaaaGrade = NaaaGrade(0);
    pub const EXCELLENT: NaaaGrade = NaaaGrade(5);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 5).then_some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            5 => "Excellent",
            4 => "Clean",
            3 => "Average",
            2 => "Rough",
            1 => "Damaged",
            _ => "Inoperative",
        }
    }
}

/// Title brand reported by the history provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleType {
    #[default]
    Clean,
    Rebuilt,
    Salvage,
    Flood,
    Irreparable,
}

impl TitleType {
    pub const fn label(self) -> &'static str {
        match self {
            TitleType::Clean => "Clean",
            TitleType::Rebuilt => "Rebuilt",
            TitleType::Salvage => "Salvage",
            TitleType::Flood => "Flood",
            TitleType::Irreparable => "Irreparable",
        }
    }

    /// Brands that end an appraisal outright. Rebuilt titles stay sellable
    /// through the wholesale lane.
    pub const fn is_branded(self) -> bool {
        matches!(
            self,
            TitleType::Salvage | TitleType::Flood | TitleType::Irreparable
        )
    }
}

/// Worst reported accident severity across the vehicle history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentLevel {
    #[default]
    None,
    Cosmetic,
    Minor,
    Moderate,
    Major,
    Severe,
}

impl AccidentLevel {
    pub const fn label(self) -> &'static str {
        match self {
            AccidentLevel::None => "No accident",
            AccidentLevel::Cosmetic => "Cosmetic",
            AccidentLevel::Minor => "Minor",
            AccidentLevel::Moderate => "Moderate",
            AccidentLevel::Major => "Major",
            AccidentLevel::Severe => "Severe",
        }
    }
}

/// Visible corrosion tier from the underbody inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RustLevel {
    #[default]
    None,
    Surface,
    Scale,
    Penetrating,
}

impl RustLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RustLevel::None => "No rust",
            RustLevel::Surface => "Surface rust",
            RustLevel::Scale => "Scale rust",
            RustLevel::Penetrating => "Penetrating rust",
        }
    }
}

/// Repair work the inspector flagged for reconditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairItem {
    Brakes,
    Tires,
    Glass,
    PaintAndBody,
    Interior,
    Mechanical,
}

impl RepairItem {
    pub const fn label(self) -> &'static str {
        match self {
            RepairItem::Brakes => "Brakes",
            RepairItem::Tires => "Tires",
            RepairItem::Glass => "Glass",
            RepairItem::PaintAndBody => "Paint and body",
            RepairItem::Interior => "Interior",
            RepairItem::Mechanical => "Mechanical",
        }
    }
}

/// Canadian province or territory where the vehicle is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "BC")]
    BritishColumbia,
    #[serde(rename = "AB")]
    Alberta,
    #[serde(rename = "SK")]
    Saskatchewan,
    #[serde(rename = "MB")]
    Manitoba,
    #[serde(rename = "ON")]
    Ontario,
    #[serde(rename = "QC")]
    Quebec,
    #[serde(rename = "NB")]
    NewBrunswick,
    #[serde(rename = "NS")]
    NovaScotia,
    #[serde(rename = "NL")]
    NewfoundlandAndLabrador,
    #[serde(rename = "PE")]
    PrinceEdwardIsland,
    #[serde(rename = "YT")]
    Yukon,
    #[serde(rename = "NT")]
    NorthwestTerritories,
    #[serde(rename = "NU")]
    Nunavut,
}

impl Province {
    /// Accepts two-letter codes and full names, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "bc" | "british columbia" => Some(Self::BritishColumbia),
            "ab" | "alberta" => Some(Self::Alberta),
            "sk" | "saskatchewan" => Some(Self::Saskatchewan),
            "mb" | "manitoba" => Some(Self::Manitoba),
            "on" | "ontario" => Some(Self::Ontario),
            "qc" | "quebec" => Some(Self::Quebec),
            "nb" | "new brunswick" => Some(Self::NewBrunswick),
            "ns" | "nova scotia" => Some(Self::NovaScotia),
            "nl" | "newfoundland" | "newfoundland and labrador" => {
                Some(Self::NewfoundlandAndLabrador)
            }
            "pe" | "pei" | "prince edward island" => Some(Self::PrinceEdwardIsland),
            "yt" | "yukon" => Some(Self::Yukon),
            "nt" | "northwest territories" => Some(Self::NorthwestTerritories),
            "nu" | "nunavut" => Some(Self::Nunavut),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Province::BritishColumbia => "BC",
            Province::Alberta => "AB",
            Province::Saskatchewan => "SK",
            Province::Manitoba => "MB",
            Province::Ontario => "ON",
            Province::Quebec => "QC",
            Province::NewBrunswick => "NB",
            Province::NovaScotia => "NS",
            Province::NewfoundlandAndLabrador => "NL",
            Province::PrinceEdwardIsland => "PE",
            Province::Yukon => "YT",
            Province::NorthwestTerritories => "NT",
            Province::Nunavut => "NU",
        }
    }

    /// Markets where rust-free western vehicles command a premium.
    pub const fn is_eastern(self) -> bool {
        matches!(
            self,
            Province::Ontario
                | Province::Quebec
                | Province::NewBrunswick
                | Province::NovaScotia
                | Province::NewfoundlandAndLabrador
                | Province::PrinceEdwardIsland
        )
    }
}

/// Body style bucket driving depreciation and seasonal demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Sedan,
    Hatchback,
    Wagon,
    Coupe,
    Convertible,
    Suv,
    Truck,
    Van,
    Minivan,
}

impl BodyType {
    /// Keyword match over free-text body descriptions. Unknown descriptions
    /// return `None` and the valuation falls back to sedan behavior.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return None;
        }
        if normalized.contains("convertible") || normalized.contains("cabriolet") {
            return Some(Self::Convertible);
        }
        if normalized.contains("suv") || normalized.contains("crossover") {
            return Some(Self::Suv);
        }
        if normalized.contains("truck") || normalized.contains("pickup") {
            return Some(Self::Truck);
        }
        if normalized.contains("minivan") {
            return Some(Self::Minivan);
        }
        if normalized.contains("van") {
            return Some(Self::Van);
        }
        if normalized.contains("wagon") {
            return Some(Self::Wagon);
        }
        if normalized.contains("hatch") {
            return Some(Self::Hatchback);
        }
        if normalized.contains("coupe") {
            return Some(Self::Coupe);
        }
        if normalized.contains("sedan") {
            return Some(Self::Sedan);
        }
        None
    }

    pub const fn label(self) -> &'static str {
        match self {
            BodyType::Sedan => "Sedan",
            BodyType::Hatchback => "Hatchback",
            BodyType::Wagon => "Wagon",
            BodyType::Coupe => "Coupe",
            BodyType::Convertible => "Convertible",
            BodyType::Suv => "SUV",
            BodyType::Truck => "Truck",
            BodyType::Van => "Van",
            BodyType::Minivan => "Minivan",
        }
    }

    /// Bodies that gain value as winter approaches.
    pub const fn is_winter_favored(self) -> bool {
        matches!(self, BodyType::Suv | BodyType::Truck)
    }
}

/// An inventory listing used for comparable pricing. Fields stay strings to
/// match the lot management export; prices that fail to parse are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparableCar {
    pub make: String,
    pub model: String,
    pub year: String,
    pub trim: String,
    pub price: String,
    pub kilometers: String,
}

impl ComparableCar {
    /// Listing price as a number, ignoring currency symbols and separators.
    pub fn parsed_price(&self) -> Option<f64> {
        parse_money(&self.price)
    }

    pub fn parsed_year(&self) -> Option<i32> {
        self.year.trim().parse::<i32>().ok()
    }

    pub fn parsed_kilometers(&self) -> Option<f64> {
        parse_money(&self.kilometers)
    }
}

fn parse_money(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Search terms for the comparable lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableQuery {
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub trim: Option<String>,
}

impl ComparableQuery {
    pub fn from_vehicle(vehicle: &VehicleFacts) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            trim: vehicle.trim.clone(),
        }
    }
}

/// Comparable lookup response for the form's live preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparablePreview {
    pub total_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
    pub sample: Vec<ComparableCar>,
}

/// One line of the valuation ledger. Amounts are absolute dollars with the
/// direction carried separately so the ledger reads like an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    pub label: String,
    pub amount: f64,
    pub direction: AdjustmentDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    Add,
    Subtract,
}

impl AdjustmentEntry {
    pub(crate) fn from_delta(label: impl Into<String>, delta: f64) -> Self {
        let direction = if delta < 0.0 {
            AdjustmentDirection::Subtract
        } else {
            AdjustmentDirection::Add
        };
        Self {
            label: label.into(),
            amount: delta.abs(),
            direction,
        }
    }

    /// The entry's dollar effect, negative for deductions.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            AdjustmentDirection::Add => self.amount,
            AdjustmentDirection::Subtract => -self.amount,
        }
    }
}

/// Acquisition lane recommended by the decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppraisalDecision {
    Buy,
    Wholesale,
    Reject,
}

impl AppraisalDecision {
    pub const fn label(self) -> &'static str {
        match self {
            AppraisalDecision::Buy => "buy",
            AppraisalDecision::Wholesale => "wholesale",
            AppraisalDecision::Reject => "reject",
        }
    }
}

/// How the base value was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseValueSource {
    ComparableSales,
    Depreciation,
}

impl BaseValueSource {
    pub const fn label(self) -> &'static str {
        match self {
            BaseValueSource::ComparableSales => "comparable_sales",
            BaseValueSource::Depreciation => "depreciation",
        }
    }
}

/// Full appraisal outcome returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalResult {
    pub decision: AppraisalDecision,
    pub reasons: Vec<String>,
    pub base_value: f64,
    pub base_value_source: BaseValueSource,
    pub retail_value: f64,
    pub retail_low: f64,
    pub retail_high: f64,
    pub wholesale_value: f64,
    pub trade_in_offer: f64,
    pub trade_in_low: f64,
    pub trade_in_high: f64,
    pub adjustments: Vec<AdjustmentEntry>,
    pub reconditioning_cost: f64,
    pub profit_margin: f64,
    pub holding_cost: f64,
    pub similar_cars: Vec<ComparableCar>,
}
