use serde::Serialize;

/// Envelope for every JSON body the API returns:
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "name": "Jane Smith" },
///   "message": "Attendee fetched"
/// }
/// ```
///
/// Error responses carry `T::default()` as `data`, usually `()` which
/// serializes to `null`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_null_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("Attendee not found")).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["message"], "Attendee not found");
    }
}
