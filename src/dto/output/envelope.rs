use serde::Serialize;

///
/// Body of every successful response, `body` fields are inlined next to `success`
///
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Failure {
    success: bool,
    pub message: String,
}

impl Failure {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}
