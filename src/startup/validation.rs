use chrono::Datelike;

use super::types::StartupDescription;

const MIN_COMPANY_NAME_CHARS: usize = 2;
const MIN_BUSINESS_MODEL_CHARS: usize = 5;
const MAX_BUSINESS_MODEL_CHARS: usize = 500;
const MAX_COMPETITION_LEVEL: u8 = 100;

/// Validate a startup description the way the prediction form does.
/// Returns all validation errors at once (not just the first).
pub fn validate_description(desc: &StartupDescription) -> Result<(), Vec<String>> {
    validate_description_for_year(desc, chrono::Utc::now().year())
}

fn validate_description_for_year(
    desc: &StartupDescription,
    current_year: i32,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if desc.company_name.trim().chars().count() < MIN_COMPANY_NAME_CHARS {
        errors.push("companyName: company name is required".to_string());
    }

    let year = desc.founding_year.trim();
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        errors.push(format!(
            "foundingYear: '{}' is not a valid year (YYYY)",
            desc.founding_year
        ));
    } else if year.parse::<i32>().map_or(true, |y| y > current_year) {
        errors.push(format!(
            "foundingYear: {} is in the future",
            desc.founding_year
        ));
    }

    if !desc.industry.is_known() {
        errors.push("industry: industry is required".to_string());
    }
    if !desc.team_size.is_known() {
        errors.push("teamSize: team size is required".to_string());
    }
    if !desc.founder_experience.is_known() {
        errors.push("founderExperience: founder experience is required".to_string());
    }
    if !desc.funding_amount.is_known() {
        errors.push("fundingAmount: funding amount is required".to_string());
    }
    if !desc.product_stage.is_known() {
        errors.push("productStage: product stage is required".to_string());
    }
    if !desc.target_market.is_known() {
        errors.push("targetMarket: target market is required".to_string());
    }

    if desc.competition_level > MAX_COMPETITION_LEVEL {
        errors.push(format!(
            "competitionLevel: {} is outside 0-100",
            desc.competition_level
        ));
    }

    let model_chars = desc.business_model.trim().chars().count();
    if model_chars < MIN_BUSINESS_MODEL_CHARS {
        errors.push("businessModel: please provide at least a brief description".to_string());
    } else if model_chars > MAX_BUSINESS_MODEL_CHARS {
        errors.push(format!(
            "businessModel: {} characters exceeds the {} character limit",
            model_chars, MAX_BUSINESS_MODEL_CHARS
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup::types::*;

    fn valid_description() -> StartupDescription {
        StartupDescription {
            company_name: "Acme Robotics".to_string(),
            industry: Industry::Manufacturing,
            founding_year: "2019".to_string(),
            team_size: TeamSize::SixToTen,
            founder_experience: FounderExperience::IndustryExpert,
            funding_amount: FundingAmount::Seed,
            product_stage: ProductStage::Beta,
            target_market: TargetMarket::B2b,
            competition_level: 55,
            business_model: "Leasing warehouse robots per month".to_string(),
        }
    }

    #[test]
    fn test_valid_description() {
        assert!(validate_description_for_year(&valid_description(), 2026).is_ok());
    }

    #[test]
    fn test_short_company_name() {
        let mut desc = valid_description();
        desc.company_name = "A".to_string();
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("companyName"));
    }

    #[test]
    fn test_malformed_founding_year() {
        let mut desc = valid_description();
        desc.founding_year = "19".to_string();
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert!(errors[0].contains("foundingYear"));
        assert!(errors[0].contains("YYYY"));
    }

    #[test]
    fn test_future_founding_year() {
        let mut desc = valid_description();
        desc.founding_year = "2031".to_string();
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert!(errors[0].contains("future"));
    }

    #[test]
    fn test_unknown_categorical_rejected() {
        let mut desc = valid_description();
        desc.industry = Industry::Unknown;
        desc.target_market = TargetMarket::Unknown;
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("industry"));
        assert!(errors[1].starts_with("targetMarket"));
    }

    #[test]
    fn test_competition_out_of_range() {
        let mut desc = valid_description();
        desc.competition_level = 150;
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert!(errors[0].starts_with("competitionLevel"));
    }

    #[test]
    fn test_business_model_bounds() {
        let mut desc = valid_description();
        desc.business_model = "SaaS".to_string();
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert!(errors[0].starts_with("businessModel"));

        desc.business_model = "x".repeat(501);
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert!(errors[0].contains("500"));

        desc.business_model = "x".repeat(500);
        assert!(validate_description_for_year(&desc, 2026).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let desc = StartupDescription {
            company_name: String::new(),                  // Error 1
            industry: Industry::Unknown,                  // Error 2
            founding_year: "abcd".to_string(),            // Error 3
            team_size: TeamSize::Solo,
            founder_experience: FounderExperience::Unknown, // Error 4
            funding_amount: FundingAmount::Bootstrap,
            product_stage: ProductStage::Idea,
            target_market: TargetMarket::C2c,
            competition_level: 101,                       // Error 5
            business_model: "".to_string(),               // Error 6
        };
        let errors = validate_description_for_year(&desc, 2026).unwrap_err();
        assert_eq!(errors.len(), 6);
    }
}
