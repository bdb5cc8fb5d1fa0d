//! Conversion engine: the public entry points
//!
//! Composes the parser, the unit algebra and the suggestion index into
//! the four operations callers use: `validate`, `convert_unit_to`,
//! `convert_to_base_units` and `check_synonyms`. Every operation returns
//! a serializable response object carrying a status and user-facing
//! messages; nothing here panics on bad input.

use crate::catalog::AVOGADRO;
use crate::dimension::{base_index, Dimension};
use crate::error::Error;
use crate::parser::{ParseOptions, ParseReport, UnitParser};
use crate::suggest::SuggestionBlock;
use crate::table::AtomTable;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const NO_UNIT_STRING_MSG: &str = "No unit string specified.";
const ARBITRARY_UNIT_MSG: &str =
    "Arbitrary units cannot be converted to or from other units.";

/// Status of a validation request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Invalid,
    Error,
}

/// Status of a conversion request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Succeeded,
    Failed,
    Error,
}

/// The `{ code, name, guidance }` unit digest used in responses
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl From<&Unit> for UnitSummary {
    fn from(unit: &Unit) -> Self {
        UnitSummary {
            code: unit.cs_code.clone(),
            name: unit.name.clone(),
            guidance: unit.guidance.clone(),
        }
    }
}

/// Response of [`Engine::validate`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub status: ValidationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucum_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitSummary>,
    pub msg: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<SuggestionBlock>>,
}

/// Per-side suggestion blocks for a failed conversion
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertSuggestions {
    pub from: Vec<SuggestionBlock>,
    pub to: Vec<SuggestionBlock>,
}

/// Response of [`Engine::convert_unit_to`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_unit: Option<Unit>,
    pub msg: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<ConvertSuggestions>,
}

/// Response of [`Engine::convert_to_base_units`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseUnitsResponse {
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    pub from_unit_is_special: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_to_exp: Option<BTreeMap<String, i32>>,
    pub msg: Vec<String>,
}

/// Response of [`Engine::check_synonyms`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymsResponse {
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<UnitSummary>>,
    pub msg: Vec<String>,
}

enum MoleMass {
    MoleToMass,
    MassToMole,
}

/// The conversion engine, borrowing an immutable atom table
pub struct Engine<'t> {
    table: &'t AtomTable,
}

impl Engine<'static> {
    /// An engine over the process-wide default table
    pub fn new() -> Self {
        Engine {
            table: crate::default_table(),
        }
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<'t> Engine<'t> {
    /// An engine over a caller-provided table
    pub fn with_table(table: &'t AtomTable) -> Self {
        Engine { table }
    }

    fn parse(&self, expression: &str, suggestions: bool) -> ParseReport {
        UnitParser::new(
            self.table,
            ParseOptions {
                suggestions,
                case_insensitive: false,
            },
        )
        .parse(expression)
    }

    /// Decide whether `expression` is a valid UCUM code
    pub fn validate(&self, expression: &str, suggest: bool) -> ValidateResponse {
        if expression.is_empty() {
            return ValidateResponse {
                status: ValidationStatus::Error,
                ucum_code: None,
                unit: None,
                msg: vec![NO_UNIT_STRING_MSG.into()],
                suggestions: None,
            };
        }

        let report = self.parse(expression, suggest);
        match report.unit {
            Some(unit) => ValidateResponse {
                status: ValidationStatus::Valid,
                ucum_code: Some(unit.cs_code.clone()),
                unit: Some(UnitSummary::from(&unit)),
                msg: report.messages,
                suggestions: None,
            },
            None => ValidateResponse {
                status: ValidationStatus::Invalid,
                ucum_code: None,
                unit: None,
                msg: report.messages,
                suggestions: (suggest && !report.suggestions.is_empty())
                    .then_some(report.suggestions),
            },
        }
    }

    /// Convert `value` from one unit expression to another
    ///
    /// When the two sides differ by exactly one mass exponent and one
    /// side is mole-based, a supplied `molecular_weight` (g/mol) rewrites
    /// the request as a mass ↔ moles conversion.
    pub fn convert_unit_to(
        &self,
        from_expression: &str,
        value: f64,
        to_expression: &str,
        suggest: bool,
        molecular_weight: Option<f64>,
    ) -> ConvertResponse {
        if from_expression.is_empty() || to_expression.is_empty() {
            return ConvertResponse {
                status: ConversionStatus::Error,
                to_val: None,
                from_unit: None,
                to_unit: None,
                msg: vec![NO_UNIT_STRING_MSG.into()],
                suggestions: None,
            };
        }
        if !value.is_finite() {
            return ConvertResponse {
                status: ConversionStatus::Error,
                to_val: None,
                from_unit: None,
                to_unit: None,
                msg: vec!["The value to convert must be a finite number.".into()],
                suggestions: None,
            };
        }

        let from_report = self.parse(from_expression, suggest);
        let to_report = self.parse(to_expression, suggest);

        let mut msg = Vec::new();
        msg.extend(from_report.messages.iter().cloned());
        if from_report.unit.is_none() {
            msg.push(format!(
                "Unable to find a unit for {from_expression}, so no conversion could be performed."
            ));
        }
        msg.extend(to_report.messages.iter().cloned());
        if to_report.unit.is_none() {
            msg.push(format!(
                "Unable to find a unit for {to_expression}, so no conversion could be performed."
            ));
        }

        let suggestions = (suggest
            && (!from_report.suggestions.is_empty() || !to_report.suggestions.is_empty()))
        .then(|| ConvertSuggestions {
            from: from_report.suggestions.clone(),
            to: to_report.suggestions.clone(),
        });

        let (Some(from_unit), Some(to_unit)) = (from_report.unit, to_report.unit) else {
            return ConvertResponse {
                status: ConversionStatus::Failed,
                to_val: None,
                from_unit: None,
                to_unit: None,
                msg,
                suggestions,
            };
        };

        // The arbitrary barrier applies before any algebra, whether the
        // arbitrary unit is a side or a factor of one.
        if from_unit.is_arbitrary || to_unit.is_arbitrary {
            msg.push(ARBITRARY_UNIT_MSG.into());
            return ConvertResponse {
                status: ConversionStatus::Failed,
                to_val: None,
                from_unit: None,
                to_unit: None,
                msg,
                suggestions,
            };
        }

        let commensurable = match (&from_unit.dim, &to_unit.dim) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };

        if commensurable {
            return match to_unit.convert_from(value, &from_unit) {
                Ok(to_val) => {
                    debug!(
                        from = %from_unit.cs_code,
                        to = %to_unit.cs_code,
                        "conversion succeeded"
                    );
                    ConvertResponse {
                        status: ConversionStatus::Succeeded,
                        to_val: Some(to_val),
                        from_unit: Some(from_unit),
                        to_unit: Some(to_unit),
                        msg,
                        suggestions,
                    }
                }
                Err(err @ Error::UnknownSpecialFunction(_)) => {
                    msg.push(format!("{err}."));
                    ConvertResponse {
                        status: ConversionStatus::Error,
                        to_val: None,
                        from_unit: None,
                        to_unit: None,
                        msg,
                        suggestions,
                    }
                }
                Err(err) => {
                    msg.push(format!("{err}."));
                    ConvertResponse {
                        status: ConversionStatus::Failed,
                        to_val: None,
                        from_unit: None,
                        to_unit: None,
                        msg,
                        suggestions,
                    }
                }
            };
        }

        if let Some(direction) = mole_mass_direction(&from_unit, &to_unit) {
            let Some(weight) = molecular_weight else {
                msg.push(format!("{}.", Error::MolecularWeightRequired));
                return ConvertResponse {
                    status: ConversionStatus::Failed,
                    to_val: None,
                    from_unit: None,
                    to_unit: None,
                    msg,
                    suggestions,
                };
            };
            if weight <= 0.0 || !weight.is_finite() {
                msg.push("The molecular weight must be a positive number.".into());
                return ConvertResponse {
                    status: ConversionStatus::Failed,
                    to_val: None,
                    from_unit: None,
                    to_unit: None,
                    msg,
                    suggestions,
                };
            }

            let base = value * from_unit.magnitude;
            let to_val = match direction {
                MoleMass::MoleToMass => (base / AVOGADRO) * weight / to_unit.magnitude,
                MoleMass::MassToMole => (base / weight) * AVOGADRO / to_unit.magnitude,
            };
            debug!(
                from = %from_unit.cs_code,
                to = %to_unit.cs_code,
                weight,
                "molar mass conversion"
            );
            return ConvertResponse {
                status: ConversionStatus::Succeeded,
                to_val: Some(to_val),
                from_unit: Some(from_unit),
                to_unit: Some(to_unit),
                msg,
                suggestions,
            };
        }

        msg.push(format!(
            "Sorry. {} cannot be converted to {}.",
            from_unit.cs_code, to_unit.cs_code
        ));
        ConvertResponse {
            status: ConversionStatus::Failed,
            to_val: None,
            from_unit: None,
            to_unit: None,
            msg,
            suggestions,
        }
    }

    /// Express `value` of `expression` in base atoms
    pub fn convert_to_base_units(&self, expression: &str, value: f64) -> BaseUnitsResponse {
        if expression.is_empty() {
            return BaseUnitsResponse {
                status: ConversionStatus::Error,
                magnitude: None,
                from_unit_is_special: false,
                unit_to_exp: None,
                msg: vec![NO_UNIT_STRING_MSG.into()],
            };
        }

        let report = self.parse(expression, false);
        let mut msg = report.messages;
        let Some(unit) = report.unit else {
            msg.push(format!(
                "Unable to find a unit for {expression}, so no conversion could be performed."
            ));
            return BaseUnitsResponse {
                status: ConversionStatus::Failed,
                magnitude: None,
                from_unit_is_special: false,
                unit_to_exp: None,
                msg,
            };
        };

        if unit.is_arbitrary {
            msg.push(ARBITRARY_UNIT_MSG.into());
            return BaseUnitsResponse {
                status: ConversionStatus::Failed,
                magnitude: None,
                from_unit_is_special: false,
                unit_to_exp: None,
                msg,
            };
        }

        let from_unit_is_special = unit.is_special();
        let mut coherent = unit.clone();
        let magnitude = match coherent.mutate_coherent(value, self.table) {
            Ok(v) => v,
            Err(err @ Error::UnknownSpecialFunction(_)) => {
                msg.push(format!("{err}."));
                return BaseUnitsResponse {
                    status: ConversionStatus::Error,
                    magnitude: None,
                    from_unit_is_special,
                    unit_to_exp: None,
                    msg,
                };
            }
            Err(err) => {
                msg.push(format!("{err}."));
                return BaseUnitsResponse {
                    status: ConversionStatus::Failed,
                    magnitude: None,
                    from_unit_is_special,
                    unit_to_exp: None,
                    msg,
                };
            }
        };

        BaseUnitsResponse {
            status: ConversionStatus::Succeeded,
            magnitude: Some(magnitude),
            from_unit_is_special,
            unit_to_exp: Some(coherent.base_exponents(self.table)),
            msg,
        }
    }

    /// Catalog atoms whose names or synonyms contain `term`
    pub fn check_synonyms(&self, term: &str) -> SynonymsResponse {
        if term.trim().is_empty() {
            return SynonymsResponse {
                status: ConversionStatus::Error,
                units: None,
                msg: vec!["No term specified for the synonym search.".into()],
            };
        }
        let found = self.table.atoms_by_synonym(term);
        if found.is_empty() {
            return SynonymsResponse {
                status: ConversionStatus::Failed,
                units: None,
                msg: vec![format!("Unable to find any units with synonym = {term}.")],
            };
        }
        SynonymsResponse {
            status: ConversionStatus::Succeeded,
            units: Some(
                found
                    .into_iter()
                    .map(|atom| UnitSummary {
                        code: atom.cs_code.clone(),
                        name: atom.name.clone(),
                        guidance: atom.guidance.clone(),
                    })
                    .collect(),
            ),
            msg: Vec::new(),
        }
    }
}

/// A request is mole ↔ mass rewritable when exactly one side is
/// mole-based and the dimensions agree after crediting the mole side
/// with one mass exponent
fn mole_mass_direction(from: &Unit, to: &Unit) -> Option<MoleMass> {
    if from.is_special() || to.is_special() {
        return None;
    }
    let mass = Dimension::base(base_index::MASS);
    let from_dim = from.dim.unwrap_or(Dimension::ZERO);
    let to_dim = to.dim.unwrap_or(Dimension::ZERO);
    if from.mole_exp == 1 && to.mole_exp == 0 && from_dim.add(&mass).ok()? == to_dim {
        Some(MoleMass::MoleToMass)
    } else if to.mole_exp == 1 && from.mole_exp == 0 && to_dim.add(&mass).ok()? == from_dim {
        Some(MoleMass::MassToMole)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine<'static> {
        Engine::new()
    }

    #[test]
    fn validate_flags_status_transitions() {
        let e = engine();
        assert_eq!(e.validate("mg", false).status, ValidationStatus::Valid);
        assert_eq!(e.validate("mcg", false).status, ValidationStatus::Invalid);
        assert_eq!(e.validate("", false).status, ValidationStatus::Error);
    }

    #[test]
    fn convert_reports_both_unparseable_sides() {
        let e = engine();
        let resp = e.convert_unit_to("bogus1x", 1.0, "alsobogus2y", false, None);
        assert_eq!(resp.status, ConversionStatus::Failed);
        let unable: Vec<&String> = resp
            .msg
            .iter()
            .filter(|m| m.starts_with("Unable to find a unit for"))
            .collect();
        assert_eq!(unable.len(), 2);
    }

    #[test]
    fn mole_mass_direction_requires_exactly_one_mole_side() {
        let table = crate::default_table();
        let parse = |s: &str| {
            UnitParser::new(table, ParseOptions::default())
                .parse(s)
                .unit
                .unwrap()
        };
        let mmol_l = parse("mmol/L");
        let mg_dl = parse("mg/dL");
        assert!(matches!(
            mole_mass_direction(&mmol_l, &mg_dl),
            Some(MoleMass::MoleToMass)
        ));
        assert!(matches!(
            mole_mass_direction(&mg_dl, &mmol_l),
            Some(MoleMass::MassToMole)
        ));
        assert!(mole_mass_direction(&mmol_l, &mmol_l).is_none());
        let g = parse("g");
        let m = parse("m");
        assert!(mole_mass_direction(&g, &m).is_none());
    }

    #[test]
    fn synonym_search_round_trips() {
        let e = engine();
        let resp = e.check_synonyms("pound");
        assert_eq!(resp.status, ConversionStatus::Succeeded);
        assert!(resp
            .units
            .unwrap()
            .iter()
            .any(|u| u.code == "[lb_av]"));

        assert_eq!(
            e.check_synonyms("").status,
            ConversionStatus::Error
        );
        assert_eq!(
            e.check_synonyms("zzqx").status,
            ConversionStatus::Failed
        );
    }
}
