use std::sync::OnceLock;

use ude_core::UdeError;
use ude_dsa::TableError;

use crate::latin1::{LATIN1_CLASSES, LATIN1_CLASS_COUNT, LATIN1_PAIRS};
use crate::models::esc_sm::{HZ_MODEL, ISO2022CN_MODEL, ISO2022JP_MODEL, ISO2022KR_MODEL};
use crate::models::lang::ALL_MODELS;
use crate::multibyte::MultiByteKind;
use crate::state_machine::CodingModel;

static CHECKED: OnceLock<Option<(&'static str, TableError)>> = OnceLock::new();

/// Checks every embedded table once per process.
///
/// The tables are compile-time data, so a failure here is a build defect.
/// It is reported at detector construction, never on the per-byte path.
pub fn validate_tables() -> Result<(), UdeError> {
    let outcome = CHECKED.get_or_init(|| {
        let result = check_all();
        if let Err(e) = &result {
            tracing::error!("embedded table check failed: {}", e);
        }
        result.err().and_then(|e| match e {
            UdeError::Table { table, error } => Some((table, error)),
            _ => None,
        })
    });
    match outcome {
        Some((table, error)) => Err(UdeError::table(table, *error)),
        None => Ok(()),
    }
}

fn check_all() -> Result<(), UdeError> {
    let coding: [&CodingModel; 4] = [&HZ_MODEL, &ISO2022CN_MODEL, &ISO2022JP_MODEL, &ISO2022KR_MODEL];
    for model in MultiByteKind::ALL.iter().map(|k| k.model()).chain(coding) {
        model.validate()?;
    }
    for model in ALL_MODELS {
        model.validate()?;
    }
    LATIN1_CLASSES
        .validate(LATIN1_CLASS_COUNT as u8 - 1)
        .map_err(|e| UdeError::table("Latin-1 classes", e))?;
    LATIN1_PAIRS
        .validate(3)
        .map_err(|e| UdeError::table("Latin-1 pairs", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_are_valid() {
        check_all().unwrap();
        assert!(validate_tables().is_ok());
        // Cached verdict.
        assert!(validate_tables().is_ok());
    }
}
