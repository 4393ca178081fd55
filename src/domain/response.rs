/// Remaining prepaid credits on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    pub sms: i64,
    pub mms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

/// One entry of the `errors` list, with whatever survived decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorEntry {
    pub code: Option<crate::domain::ErrorCode>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: Status,
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResponse {
    pub status: Status,
    pub errors: Vec<ApiErrorEntry>,
    pub balance: Balance,
}
