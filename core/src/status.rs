//! Classification of response status codes.
//!
//! Every `parse_*` method in `CustomerClient` goes through `StatusClass`, so
//! the code → outcome table lives in exactly one place.

/// Outcome tag for an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200: the body is the payload.
    Ok,
    /// 201: the body is the created record.
    Created,
    /// 204: success without a body.
    NoContent,
    /// 404
    NotFound,
    /// 409: the server rejected a duplicate.
    Conflict,
    /// Anything else, carried verbatim.
    Other(u16),
}

impl StatusClass {
    pub fn from_code(status: u16) -> Self {
        match status {
            200 => StatusClass::Ok,
            201 => StatusClass::Created,
            204 => StatusClass::NoContent,
            404 => StatusClass::NotFound,
            409 => StatusClass::Conflict,
            other => StatusClass::Other(other),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            StatusClass::Ok => 200,
            StatusClass::Created => 201,
            StatusClass::NoContent => 204,
            StatusClass::NotFound => 404,
            StatusClass::Conflict => 409,
            StatusClass::Other(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_tags() {
        assert_eq!(StatusClass::from_code(200), StatusClass::Ok);
        assert_eq!(StatusClass::from_code(201), StatusClass::Created);
        assert_eq!(StatusClass::from_code(204), StatusClass::NoContent);
        assert_eq!(StatusClass::from_code(404), StatusClass::NotFound);
        assert_eq!(StatusClass::from_code(409), StatusClass::Conflict);
    }

    #[test]
    fn other_codes_are_carried_verbatim() {
        for code in [202, 400, 401, 422, 500, 503] {
            assert_eq!(StatusClass::from_code(code), StatusClass::Other(code));
        }
    }

    #[test]
    fn code_inverts_from_code() {
        for code in [200, 201, 204, 404, 409, 418, 500] {
            assert_eq!(StatusClass::from_code(code).code(), code);
        }
    }
}
