use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateTodoRequest<'a> {
    pub content: &'a str,
    pub time: u64,
}

#[derive(Debug, Serialize)]
pub struct UpdateTimeRequest {
    pub time: u64,
}
