//! Reference data served when the gateway has no matching records.
//!
//! The sets are loaded once at startup (built in, or from a YAML file) and
//! shared read-only between the lookup services. Fallback records carry no
//! stored identity; their `id` is synthesized from list position.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Company, Disclosure};

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reference data: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Reference company entry; `id` is its 1-based list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySeed {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

impl CompanySeed {
    pub fn matches_text(&self, text: &str) -> bool {
        self.name.contains(text) || self.code.contains(text)
    }

    pub fn to_company(&self, id: i64) -> Company {
        Company {
            id,
            code: self.code.clone(),
            name: self.name.clone(),
            market: self.market.clone(),
            sector: self.sector.clone(),
        }
    }
}

/// Reference disclosure entry. Report dates are whole days at midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureSeed {
    pub company_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub report_date: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
}

impl DisclosureSeed {
    pub fn report_datetime(&self) -> DateTime<Utc> {
        self.report_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// `filed_date` is the response time, not the original filing time.
    pub fn to_disclosure(&self, id: i64, filed_date: DateTime<Utc>) -> Disclosure {
        Disclosure {
            id,
            company_id: self.company_id,
            title: self.title.clone(),
            content: self.content.clone(),
            report_date: self.report_datetime(),
            filed_date,
            url: self.url.clone(),
        }
    }
}

/// The immutable fallback sets, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub companies: Vec<CompanySeed>,
    #[serde(default)]
    pub disclosures: Vec<DisclosureSeed>,
}

/// 1-based position id for the entry at `index`.
pub(crate) fn position_id(index: usize) -> i64 {
    index as i64 + 1
}

impl ReferenceData {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ReferenceDataError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Reference company for a 1-based position id.
    pub fn company_at(&self, id: i64) -> Option<Company> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.companies.get(index).map(|seed| seed.to_company(id))
    }

    /// Sample KOSPI listings and DART filings.
    pub fn builtin() -> Self {
        let company = |code: &str, name: &str, sector: &str| CompanySeed {
            code: code.into(),
            name: name.into(),
            market: Some("KOSPI".into()),
            sector: Some(sector.into()),
        };
        let disclosure = |company_id: i64, title: &str, content: &str, date: (i32, u32, u32), rcp_no: &str| {
            DisclosureSeed {
                company_id,
                title: title.into(),
                content: Some(content.into()),
                report_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                    .expect("built-in report dates are valid calendar dates"),
                url: Some(format!(
                    "https://dart.fss.or.kr/dsaf001/main.do?rcpNo={rcp_no}"
                )),
            }
        };

        Self {
            companies: vec![
                company("005930", "삼성전자", "전자"),
                company("373220", "LG에너지솔루션", "배터리"),
                company("000660", "SK하이닉스", "반도체"),
                company("005380", "현대차", "자동차"),
                company("035420", "NAVER", "IT"),
                company("051910", "LG화학", "화학"),
                company("006400", "삼성SDI", "배터리"),
                company("068270", "셀트리온", "바이오"),
                company("207940", "삼성바이오로직스", "바이오"),
                company("028260", "삼성물산", "지주사"),
            ],
            disclosures: vec![
                disclosure(1, "분기보고서", "2024년 4분기 분기보고서", (2025, 2, 20), "20250220000123"),
                disclosure(1, "주주총회 소집 통지", "제85기 정기주주총회 소집 통지", (2025, 2, 15), "20250215000456"),
                disclosure(2, "반기보고서", "2024년 반기보고서", (2025, 2, 18), "20250218000789"),
                disclosure(3, "사업보고서", "2024년 사업보고서", (2025, 2, 22), "20250222000111"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_ten_companies_and_four_disclosures() {
        let data = ReferenceData::builtin();
        assert_eq!(data.companies.len(), 10);
        assert_eq!(data.disclosures.len(), 4);
        assert_eq!(data.companies[0].name, "삼성전자");
        assert_eq!(data.companies[6].name, "삼성SDI");
    }

    #[test]
    fn company_at_uses_one_based_positions() {
        let data = ReferenceData::builtin();
        let c = data.company_at(3).unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.code, "000660");
        assert!(data.company_at(0).is_none());
        assert!(data.company_at(11).is_none());
        assert!(data.company_at(-1).is_none());
    }

    #[test]
    fn builtin_report_dates_are_the_filing_dates() {
        let dates: Vec<String> = ReferenceData::builtin()
            .disclosures
            .iter()
            .map(|d| d.report_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-02-20", "2025-02-15", "2025-02-18", "2025-02-22"]);
    }

    #[test]
    fn report_date_is_midnight_utc() {
        let seed = &ReferenceData::builtin().disclosures[0];
        assert_eq!(seed.report_datetime().to_rfc3339(), "2025-02-20T00:00:00+00:00");
    }

    #[test]
    fn parses_yaml_with_optional_fields_omitted() {
        let yaml = r#"
companies:
  - code: "091990"
    name: 셀트리온헬스케어
    market: KOSDAQ
  - code: "999999"
    name: Bare Co
disclosures:
  - company_id: 1
    title: 기재정정
    report_date: 2025-03-01
"#;
        let data = ReferenceData::from_yaml_str(yaml).unwrap();
        assert_eq!(data.companies.len(), 2);
        assert_eq!(data.companies[0].market.as_deref(), Some("KOSDAQ"));
        assert_eq!(data.companies[1].sector, None);
        assert_eq!(data.disclosures[0].url, None);
        assert_eq!(
            data.disclosures[0].report_date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_yaml() {
        let yaml = "disclosures:\n  - company_id: one\n    title: x\n    report_date: 2025-03-01\n";
        assert!(matches!(
            ReferenceData::from_yaml_str(yaml),
            Err(ReferenceDataError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "companies:\n  - code: \"005930\"\n    name: 삼성전자").unwrap();
        let data = ReferenceData::from_file(file.path()).unwrap();
        assert_eq!(data.companies.len(), 1);
        assert!(data.disclosures.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReferenceData::from_file("/nonexistent/reference.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/reference.yaml"));
    }

    #[test]
    fn shipped_sample_matches_builtin() {
        let sample = include_str!("../../../config/reference_data.yaml");
        let data = ReferenceData::from_yaml_str(sample).unwrap();
        assert_eq!(data, ReferenceData::builtin());
    }
}
