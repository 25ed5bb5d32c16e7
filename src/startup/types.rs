use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a categorical form field: its wire values, human labels, and an
/// `Unknown` catch-all so unrecognized input never fails to deserialize.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
            #[serde(other, rename = "unknown")]
            Unknown,
        }

        impl $name {
            /// Every known value, in form order (excludes `Unknown`).
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parse a wire value, case-insensitively. Never fails.
            pub fn parse(s: &str) -> Self {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .unwrap_or($name::Unknown)
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown => "unknown",
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unknown => "Unknown",
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::parse(s)
            }
        }
    };
}

categorical! {
    pub enum Industry {
        Tech => "tech", "Technology/Software";
        Healthcare => "healthcare", "Healthcare";
        Finance => "finance", "Finance/Fintech";
        Ecommerce => "ecommerce", "E-commerce";
        Education => "education", "Education";
        Manufacturing => "manufacturing", "Manufacturing";
        Service => "service", "Service";
        Other => "other", "Other";
    }
}

categorical! {
    pub enum TeamSize {
        Solo => "solo", "Solo Founder";
        TwoToFive => "2-5", "2-5 Employees";
        SixToTen => "6-10", "6-10 Employees";
        ElevenToTwenty => "11-20", "11-20 Employees";
        TwentyOneToFifty => "21-50", "21-50 Employees";
        FiftyPlus => "50+", "50+ Employees";
    }
}

categorical! {
    pub enum FounderExperience {
        FirstTime => "first-time", "First-time Founder";
        PrevFailed => "prev-failed", "Previous Failed Startup";
        PrevSuccess => "prev-success", "Previous Successful Exit";
        IndustryExpert => "industry-expert", "Industry Expert (10+ years)";
        Serial => "serial", "Serial Entrepreneur";
    }
}

categorical! {
    pub enum FundingAmount {
        Bootstrap => "bootstrap", "Bootstrapped";
        Angel => "angel", "Angel Investment ($100K-$500K)";
        Seed => "seed", "Seed Round ($500K-$2M)";
        SeriesA => "seriesA", "Series A ($2M-$10M)";
        SeriesB => "seriesB", "Series B ($10M+)";
    }
}

categorical! {
    pub enum ProductStage {
        Idea => "idea", "Idea/Concept";
        Mvp => "mvp", "Minimum Viable Product";
        Beta => "beta", "Beta Testing";
        Launched => "launched", "Launched/Market Entry";
        Growth => "growth", "Growth/Scaling";
    }
}

categorical! {
    pub enum TargetMarket {
        B2c => "b2c", "B2C (Business to Consumer)";
        B2b => "b2b", "B2B (Business to Business)";
        B2b2c => "b2b2c", "B2B2C";
        C2c => "c2c", "C2C (Consumer to Consumer)";
        Enterprise => "enterprise", "Enterprise";
        Government => "government", "Government";
    }
}

/// Everything the prediction form collects about a startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupDescription {
    pub company_name: String,
    pub industry: Industry,
    pub founding_year: String,
    pub team_size: TeamSize,
    pub founder_experience: FounderExperience,
    pub funding_amount: FundingAmount,
    pub product_stage: ProductStage,
    pub target_market: TargetMarket,
    /// 0 (open field) to 100 (saturated market)
    pub competition_level: u8,
    pub business_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(TeamSize::parse("solo"), TeamSize::Solo);
        assert_eq!(TeamSize::parse("50+"), TeamSize::FiftyPlus);
        assert_eq!(FundingAmount::parse("seriesB"), FundingAmount::SeriesB);
        assert_eq!(TargetMarket::parse("b2b2c"), TargetMarket::B2b2c);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(FundingAmount::parse(" SeriesA "), FundingAmount::SeriesA);
        assert_eq!(Industry::parse("TECH"), Industry::Tech);
    }

    #[test]
    fn test_parse_unrecognized_is_unknown() {
        assert_eq!(Industry::parse("space-mining"), Industry::Unknown);
        assert_eq!(ProductStage::parse(""), ProductStage::Unknown);
        assert!(!ProductStage::Unknown.is_known());
    }

    #[test]
    fn test_all_excludes_unknown() {
        assert_eq!(Industry::ALL.len(), 8);
        assert_eq!(TeamSize::ALL.len(), 6);
        assert_eq!(FounderExperience::ALL.len(), 5);
        assert_eq!(FundingAmount::ALL.len(), 5);
        assert_eq!(ProductStage::ALL.len(), 5);
        assert_eq!(TargetMarket::ALL.len(), 6);
        assert!(Industry::ALL.iter().all(|i| i.is_known()));
    }

    #[test]
    fn test_wire_values_roundtrip_through_parse() {
        for stage in ProductStage::ALL {
            assert_eq!(ProductStage::parse(stage.as_str()), *stage);
        }
    }

    #[test]
    fn test_label_display() {
        assert_eq!(FundingAmount::SeriesB.to_string(), "Series B ($10M+)");
        assert_eq!(TeamSize::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_description_deserializes_camel_case() {
        let json = r#"{
            "companyName": "Acme",
            "industry": "fintech-ish",
            "foundingYear": "2021",
            "teamSize": "6-10",
            "founderExperience": "serial",
            "fundingAmount": "seed",
            "productStage": "beta",
            "targetMarket": "b2b",
            "competitionLevel": 40,
            "businessModel": "Subscription software for clinics"
        }"#;
        let desc: StartupDescription = serde_json::from_str(json).unwrap();
        assert_eq!(desc.company_name, "Acme");
        assert_eq!(desc.industry, Industry::Unknown);
        assert_eq!(desc.team_size, TeamSize::SixToTen);
        assert_eq!(desc.competition_level, 40);
    }

    #[test]
    fn test_description_serializes_wire_values() {
        let desc = StartupDescription {
            company_name: "Acme".to_string(),
            industry: Industry::Tech,
            founding_year: "2020".to_string(),
            team_size: TeamSize::FiftyPlus,
            founder_experience: FounderExperience::FirstTime,
            funding_amount: FundingAmount::SeriesA,
            product_stage: ProductStage::Mvp,
            target_market: TargetMarket::Enterprise,
            competition_level: 10,
            business_model: "Usage-based pricing".to_string(),
        };
        let value = serde_json::to_value(&desc).unwrap();
        assert_eq!(value["teamSize"], "50+");
        assert_eq!(value["fundingAmount"], "seriesA");
        assert_eq!(value["founderExperience"], "first-time");
    }
}
