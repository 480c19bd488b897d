//! Lookup data for the valuation pipeline. Unknown keys never fail; they
//! degrade to the neutral value so a sparse submission still prices.

use super::domain::{AccidentLevel, BodyType, NaaaGrade, Province, RepairItem, RustLevel, TitleType};

/// Fleet-average sticker used when the submission carries no MSRP.
pub(crate) const DEFAULT_MSRP: f64 = 35_000.0;

/// Mid-life age assumed when the model year is unknown.
pub(crate) const DEFAULT_VEHICLE_AGE: i32 = 5;

/// Regional demand multiplier keyed by registration province.
pub(crate) fn province_multiplier(province: Province) -> f64 {
    match province {
        Province::BritishColumbia => 1.12,
        Province::Alberta => 1.09,
        Province::Saskatchewan | Province::Manitoba => 1.05,
        Province::Ontario => 0.99,
        Province::Quebec => 0.92,
        Province::NewBrunswick
        | Province::NovaScotia
        | Province::NewfoundlandAndLabrador
        | Province::PrinceEdwardIsland => 0.91,
        Province::Yukon | Province::NorthwestTerritories | Province::Nunavut => 1.00,
    }
}

/// Month-keyed demand curve for the overall used market. Peaks with the
/// spring tax-refund season, softest through December.
pub(crate) fn seasonal_base_factor(month: u32) -> f64 {
    match month {
        1 | 2 => 0.97,
        3 => 1.02,
        4 => 1.04,
        5 => 1.05,
        6 => 1.03,
        7 | 8 => 1.02,
        9 => 1.03,
        10 => 1.02,
        11 => 0.98,
        _ => 0.95,
    }
}

/// First-year and subsequent-year depreciation fractions for a body style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DepreciationBand {
    pub(crate) first_year: f64,
    pub(crate) later_years: f64,
}

/// Unknown body styles depreciate like sedans.
pub(crate) fn depreciation_band(body_type: Option<BodyType>) -> DepreciationBand {
    match body_type {
        Some(BodyType::Suv) => DepreciationBand {
            first_year: 0.18,
            later_years: 0.10,
        },
        Some(BodyType::Truck) => DepreciationBand {
            first_year: 0.15,
            later_years: 0.09,
        },
        Some(BodyType::Coupe) => DepreciationBand {
            first_year: 0.22,
            later_years: 0.13,
        },
        Some(BodyType::Convertible) => DepreciationBand {
            first_year: 0.24,
            later_years: 0.14,
        },
        Some(BodyType::Wagon) => DepreciationBand {
            first_year: 0.21,
            later_years: 0.12,
        },
        Some(BodyType::Van) => DepreciationBand {
            first_year: 0.22,
            later_years: 0.13,
        },
        Some(BodyType::Minivan) => DepreciationBand {
            first_year: 0.23,
            later_years: 0.13,
        },
        Some(BodyType::Sedan) | Some(BodyType::Hatchback) | None => DepreciationBand {
            first_year: 0.20,
            later_years: 0.12,
        },
    }
}

/// Resale-strength multiplier by make, case-insensitive. Unlisted makes
/// hold the market average.
pub(crate) fn brand_multiplier(make: &str) -> f64 {
    match make.trim().to_ascii_lowercase().as_str() {
        "lexus" => 1.10,
        "toyota" => 1.08,
        "honda" => 1.07,
        "subaru" => 1.04,
        "acura" => 1.03,
        "mazda" => 1.02,
        "jeep" => 0.99,
        "hyundai" | "kia" => 0.98,
        "nissan" | "gmc" => 0.97,
        "ford" | "ram" => 0.96,
        "chevrolet" | "volkswagen" => 0.95,
        "bmw" | "mercedes" | "mercedes-benz" => 0.93,
        "audi" | "dodge" => 0.92,
        "chrysler" => 0.90,
        _ => 1.00,
    }
}

/// Fraction of base value removed for a title brand.
pub(crate) fn title_deduction_rate(title: TitleType) -> f64 {
    match title {
        TitleType::Clean => 0.0,
        TitleType::Rebuilt => 0.30,
        TitleType::Salvage | TitleType::Flood | TitleType::Irreparable => 1.00,
    }
}

/// Fraction of base value removed for the worst reported accident.
pub(crate) fn accident_deduction_rate(level: AccidentLevel) -> f64 {
    match level {
        AccidentLevel::None => 0.0,
        AccidentLevel::Cosmetic => 0.075,
        AccidentLevel::Minor => 0.10,
        AccidentLevel::Moderate => 0.125,
        AccidentLevel::Major => 0.20,
        AccidentLevel::Severe => 0.35,
    }
}

/// Dollar range for one reconditioning line item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CostBand {
    pub(crate) low: f64,
    pub(crate) high: f64,
}

impl CostBand {
    pub(crate) const ZERO: CostBand = CostBand { low: 0.0, high: 0.0 };

    pub(crate) fn midpoint(self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Baseline reconditioning spend implied by the NAAA grade alone.
pub(crate) fn recondition_band(grade: NaaaGrade) -> CostBand {
    match grade.value() {
        5 => CostBand {
            low: 500.0,
            high: 1_000.0,
        },
        4 => CostBand {
            low: 1_000.0,
            high: 1_500.0,
        },
        3 => CostBand {
            low: 1_500.0,
            high: 2_500.0,
        },
        2 => CostBand {
            low: 2_500.0,
            high: 4_000.0,
        },
        1 => CostBand {
            low: 4_000.0,
            high: 6_000.0,
        },
        // Grade 0 units are rejected; no retail reconditioning estimate.
        _ => CostBand::ZERO,
    }
}

/// Typical shop cost for a flagged repair item.
pub(crate) fn repair_cost_band(item: RepairItem) -> CostBand {
    match item {
        RepairItem::Brakes => CostBand {
            low: 300.0,
            high: 800.0,
        },
        RepairItem::Tires => CostBand {
            low: 400.0,
            high: 1_200.0,
        },
        RepairItem::Glass => CostBand {
            low: 200.0,
            high: 600.0,
        },
        RepairItem::PaintAndBody => CostBand {
            low: 500.0,
            high: 2_000.0,
        },
        RepairItem::Interior => CostBand {
            low: 200.0,
            high: 1_000.0,
        },
        RepairItem::Mechanical => CostBand {
            low: 500.0,
            high: 3_000.0,
        },
    }
}

/// Remediation cost for the observed rust tier.
pub(crate) fn rust_cost_band(level: RustLevel) -> CostBand {
    match level {
        RustLevel::None => CostBand::ZERO,
        RustLevel::Surface => CostBand {
            low: 200.0,
            high: 500.0,
        },
        RustLevel::Scale => CostBand {
            low: 800.0,
            high: 2_000.0,
        },
        RustLevel::Penetrating => CostBand {
            low: 2_500.0,
            high: 6_000.0,
        },
    }
}
