use serde::Deserialize;

// Fields arrive as "123", 123 or null depending on the record
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub(crate) enum LooseValue {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl LooseValue {
    pub(crate) fn as_text(&self) -> String {
        match self {
            LooseValue::Str(s) => s.clone(),
            LooseValue::Num(n) => n.to_string(),
            LooseValue::Bool(b) => b.to_string(),
        }
    }
}

pub(crate) fn text(v: Option<&LooseValue>) -> Option<String> {
    v.map(LooseValue::as_text)
}

// The feed is either the bare row array or the exchange's paging envelope around it
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ShPayload {
    Rows(Vec<ShTradeNode>),
    Envelope { result: Vec<ShTradeNode> },
}

impl ShPayload {
    pub(crate) fn into_rows(self) -> Vec<ShTradeNode> {
        match self {
            ShPayload::Rows(rows) => rows,
            ShPayload::Envelope { result } => result,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct ShTradeNode {
    #[serde(rename = "COMPANY_CODE")]
    pub(crate) company_code: Option<LooseValue>,
    #[serde(rename = "COMPANY_ABBR")]
    pub(crate) company_abbr: Option<String>,
    #[serde(rename = "NAME")]
    pub(crate) name: Option<String>,
    #[serde(rename = "CHANGE_DATE")]
    pub(crate) change_date: Option<String>,
    #[serde(rename = "FORM_DATE")]
    pub(crate) form_date: Option<String>,
    #[serde(rename = "CHANGE_NUM")]
    pub(crate) change_num: Option<LooseValue>,
    #[serde(rename = "CURRENT_AVG_PRICE")]
    pub(crate) current_avg_price: Option<LooseValue>,
    #[serde(rename = "CHANGE_REASON")]
    pub(crate) change_reason: Option<String>,
    #[serde(rename = "HOLDSTOCK_NUM")]
    pub(crate) holdstock_num: Option<LooseValue>,
    #[serde(rename = "DUTY")]
    pub(crate) duty: Option<String>,
}
