use serde::Serialize;
use serde_json::Value;

/// One data row of the sheet, named by position: column A is the id,
/// B the avatar name and C the performance score. Missing trailing cells
/// are left out of the JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "Avatar_Name", skip_serializing_if = "Option::is_none")]
    pub avatar_name: Option<Value>,
    #[serde(rename = "Performance_Score", skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<Value>,
}

impl From<Vec<Value>> for Record {
    fn from(row: Vec<Value>) -> Self {
        let mut cells = row.into_iter();
        Record {
            id: cells.next(),
            avatar_name: cells.next(),
            performance_score: cells.next(),
        }
    }
}
