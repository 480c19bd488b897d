use crate::infra::{default_business_settings, load_inventory, InMemoryInventoryStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use lot_iq::appraisal::domain::{
    AdjustmentDirection, AppraisalResult, AppraisalSubmission, ComparableQuery, TitleType,
    VehicleInput,
};
use lot_iq::appraisal::AppraisalService;
use lot_iq::config::ValuationConfig;
use lot_iq::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// Vehicle make
    #[arg(long)]
    pub(crate) make: String,
    /// Vehicle model
    #[arg(long)]
    pub(crate) model: String,
    /// Model year
    #[arg(long)]
    pub(crate) year: Option<String>,
    /// Trim level
    #[arg(long)]
    pub(crate) trim: Option<String>,
    /// Odometer reading in kilometers
    #[arg(long)]
    pub(crate) kilometers: Option<String>,
    /// Body style (sedan, suv, truck, ...)
    #[arg(long)]
    pub(crate) body_type: Option<String>,
    /// Province or territory of the selling market
    #[arg(long)]
    pub(crate) province: Option<String>,
    /// Original MSRP used for the depreciation fallback
    #[arg(long)]
    pub(crate) msrp: Option<String>,
    /// NAAA condition grade, 0 through 5
    #[arg(long)]
    pub(crate) grade: Option<u8>,
    /// Title brand (clean, rebuilt, salvage, flood, irreparable)
    #[arg(long, value_parser = parse_title)]
    pub(crate) title: Option<TitleType>,
    /// Number of previous owners
    #[arg(long)]
    pub(crate) owners: Option<u8>,
    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Inventory CSV export to price against instead of the seeded lot
    #[arg(long)]
    pub(crate) inventory_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Valuation date for every scenario (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Inventory CSV export to price against instead of the seeded lot
    #[arg(long)]
    pub(crate) inventory_csv: Option<PathBuf>,
}

fn parse_title(raw: &str) -> Result<TitleType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "clean" => Ok(TitleType::Clean),
        "rebuilt" => Ok(TitleType::Rebuilt),
        "salvage" => Ok(TitleType::Salvage),
        "flood" => Ok(TitleType::Flood),
        "irreparable" => Ok(TitleType::Irreparable),
        other => Err(format!(
            "unknown title brand '{other}', expected clean, rebuilt, salvage, flood, or irreparable"
        )),
    }
}

fn build_service(
    inventory_csv: Option<PathBuf>,
) -> Result<AppraisalService<InMemoryInventoryStore>, AppError> {
    let inventory = load_inventory(inventory_csv)?;
    let store = Arc::new(InMemoryInventoryStore::with_cars(inventory));
    let settings = default_business_settings(&ValuationConfig::default());
    Ok(AppraisalService::new(store, settings))
}

pub(crate) fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let AppraiseArgs {
        make,
        model,
        year,
        trim,
        kilometers,
        body_type,
        province,
        msrp,
        grade,
        title,
        owners,
        as_of,
        inventory_csv,
    } = args;

    let service = build_service(inventory_csv)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let mut submission = AppraisalSubmission {
        vehicle: VehicleInput {
            make,
            model,
            year: year.unwrap_or_default(),
            trim: trim.unwrap_or_default(),
            kilometers: kilometers.unwrap_or_default(),
            body_type: body_type.unwrap_or_default(),
            province: province.unwrap_or_default(),
            msrp: msrp.unwrap_or_default(),
            ..VehicleInput::default()
        },
        ..AppraisalSubmission::default()
    };
    if let Some(grade) = grade {
        submission.condition.naaa_grade = grade;
    }
    if let Some(title) = title {
        submission.history.title_type = title;
    }
    if let Some(owners) = owners {
        submission.history.owner_count = owners;
    }

    println!("Lot IQ appraisal (valued {as_of})");
    match service.appraise(submission, as_of) {
        Ok(result) => render_appraisal(&result),
        Err(err) => println!("Appraisal failed: {err}"),
    }

    Ok(())
}

pub(crate) fn run_inventory_preview(args: crate::cli::PreviewArgs) -> Result<(), AppError> {
    let crate::cli::PreviewArgs {
        make,
        model,
        year,
        trim,
        inventory_csv,
    } = args;

    let service = build_service(inventory_csv)?;
    let query = ComparableQuery {
        make,
        model,
        year,
        trim,
    };

    match service.comparables(&query) {
        Ok(preview) => {
            println!("Matching listings: {}", preview.total_matches);
            match preview.average_price {
                Some(average) => println!("Average asking price: ${average:.0}"),
                None => println!("Average asking price: unavailable (no listed prices)"),
            }
            for car in &preview.sample {
                println!(
                    "  - {} {} {} {} | {} | {} km",
                    car.year, car.make, car.model, car.trim, car.price, car.kilometers
                );
            }
        }
        Err(err) => println!("Lookup failed: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        as_of,
        inventory_csv,
    } = args;

    let service = build_service(inventory_csv)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    println!("Lot IQ appraisal demo (valued {as_of})");

    println!("\nScenario 1: clean 2020 Toyota Camry, 60,000 km, Ontario");
    let clean = demo_submission();
    run_scenario(&service, clean, as_of);

    println!("\nScenario 2: the same Camry with a salvage title");
    let mut salvage = demo_submission();
    salvage.history.title_type = TitleType::Salvage;
    run_scenario(&service, salvage, as_of);

    println!("\nScenario 3: 2012 Ford F-150, 240,000 km, check engine light on");
    let mut worn = demo_submission();
    worn.vehicle.make = "Ford".to_string();
    worn.vehicle.model = "F-150".to_string();
    worn.vehicle.year = "2012".to_string();
    worn.vehicle.trim = "XLT".to_string();
    worn.vehicle.kilometers = "240000".to_string();
    worn.vehicle.body_type = "Truck".to_string();
    worn.condition.check_engine_light = true;
    run_scenario(&service, worn, as_of);

    println!("\nComparable lookup: Toyota Camry around 2020");
    let preview = service.comparables(&ComparableQuery {
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: Some(2020),
        trim: None,
    });
    match preview {
        Ok(preview) => {
            println!("- {} matching listings", preview.total_matches);
            if let Some(average) = preview.average_price {
                println!("- Average asking price ${average:.0}");
            }
        }
        Err(err) => println!("- Lookup failed: {err}"),
    }

    Ok(())
}

fn demo_submission() -> AppraisalSubmission {
    AppraisalSubmission {
        vehicle: VehicleInput {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            trim: "LE".to_string(),
            kilometers: "60000".to_string(),
            body_type: "Sedan".to_string(),
            province: "ON".to_string(),
            ..VehicleInput::default()
        },
        ..AppraisalSubmission::default()
    }
}

fn run_scenario(
    service: &AppraisalService<InMemoryInventoryStore>,
    submission: AppraisalSubmission,
    as_of: NaiveDate,
) {
    match service.appraise(submission, as_of) {
        Ok(result) => render_appraisal(&result),
        Err(err) => println!("Appraisal failed: {err}"),
    }
}

fn render_appraisal(result: &AppraisalResult) {
    println!("Decision: {}", result.decision.label());
    for reason in &result.reasons {
        println!("  - {reason}");
    }

    println!(
        "Base value: ${:.0} ({})",
        result.base_value,
        result.base_value_source.label()
    );

    if result.adjustments.is_empty() {
        println!("Adjustments: none");
    } else {
        println!("Adjustments:");
        for entry in &result.adjustments {
            let sign = match entry.direction {
                AdjustmentDirection::Add => '+',
                AdjustmentDirection::Subtract => '-',
            };
            println!("  {sign} ${:.0} {}", entry.amount, entry.label);
        }
    }

    println!(
        "Retail value: ${:.0} (range ${:.0} - ${:.0})",
        result.retail_value, result.retail_low, result.retail_high
    );
    println!("Wholesale value: ${:.0}", result.wholesale_value);
    println!(
        "Costs: reconditioning ${:.0} | profit target ${:.0} | holding ${:.0}",
        result.reconditioning_cost, result.profit_margin, result.holding_cost
    );
    println!(
        "Trade-in offer: ${:.0} (range ${:.0} - ${:.0})",
        result.trade_in_offer, result.trade_in_low, result.trade_in_high
    );

    if !result.similar_cars.is_empty() {
        println!("Comparable listings:");
        for car in &result.similar_cars {
            println!(
                "  - {} {} {} {} | {} | {} km",
                car.year, car.make, car.model, car.trim, car.price, car.kilometers
            );
        }
    }
}
