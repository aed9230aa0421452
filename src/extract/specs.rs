use crate::models::{DriveType, FuelType, Specs, Transmission};
use regex::Regex;
use std::sync::LazyLock;

static ENGINE_VOLUME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)[LT]").unwrap());

const TRANSMISSION_RULES: &[(&[&str], Transmission)] = &[
    (&["自动", "DCT", "CVT", "AT"], Transmission::Automatic),
    (&["手动", "MT", "手挡"], Transmission::Manual),
];

const FUEL_RULES: &[(&[&str], FuelType)] = &[
    (&["混动", "HV", "双擎", "Hybrid"], FuelType::Hybrid),
    (&["电动", "EV", "纯电"], FuelType::Electric),
    (&["柴油", "Diesel", "TDI", "CDI"], FuelType::Diesel),
    (&["汽油", "TFSI", "TSI", "Petrol"], FuelType::Petrol),
];

const DRIVE_RULES: &[(&[&str], DriveType)] = &[
    (&["四驱", "4WD", "AWD", "4MATIC", "xDrive", "quattro"], DriveType::Awd),
    (&["前驱", "FWD"], DriveType::Fwd),
    (&["后驱", "RWD"], DriveType::Rwd),
];

/// Value of the first rule with a keyword present in `text`
fn first_rule<T: Copy>(text: &str, rules: &[(&[&str], T)]) -> Option<T> {
    for (keywords, value) in rules {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return Some(*value);
        }
    }
    None
}

/// Displacement such as `2.0T` normalised to `2.0L`
pub fn extract_engine_volume(text: &str) -> Option<String> {
    ENGINE_VOLUME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|volume| format!("{}L", volume.as_str()))
}

pub fn extract_transmission(text: &str) -> Transmission {
    first_rule(text, TRANSMISSION_RULES).unwrap_or(Transmission::Unknown)
}

/// Petrol unless a keyword says otherwise
pub fn extract_fuel_type(text: &str) -> FuelType {
    first_rule(text, FUEL_RULES).unwrap_or(FuelType::Petrol)
}

/// Front-wheel drive unless a keyword says otherwise
pub fn extract_drive_type(text: &str) -> DriveType {
    first_rule(text, DRIVE_RULES).unwrap_or(DriveType::Fwd)
}

pub fn extract_specs(text: &str) -> Specs {
    Specs {
        engine_volume: extract_engine_volume(text),
        transmission: extract_transmission(text),
        fuel_type: extract_fuel_type(text),
        drive_type: extract_drive_type(text),
    }
}
