//! Standard response envelope helpers: `{ success, data }` for single
//! resources, plus pagination fields on list bodies.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct One<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct Many<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: u64,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<One<T>>) {
    (StatusCode::OK, Json(One { success: true, data }))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<One<T>>) {
    (StatusCode::CREATED, Json(One { success: true, data }))
}

pub fn list<T: Serialize>(data: Vec<T>, total: u64, page: u32, limit: u32) -> (StatusCode, Json<Many<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(Many {
            success: true,
            data,
            count,
            total,
            page,
            pages: page_count(total, limit),
        }),
    )
}

/// Number of pages for `total` rows at `limit` per page. Zero rows is one
/// empty page so clients never divide by zero.
pub fn page_count(total: u64, limit: u32) -> u32 {
    if total == 0 {
        return 1;
    }
    total.div_ceil(limit.max(1) as u64) as u32
}

/// Clamp query paging to sane bounds: page >= 1, limit in 1..=100, default 20.
pub fn page_window(page: Option<u32>, limit: Option<u32>) -> (u32, u32, u32) {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = (page - 1).saturating_mul(limit);
    (page, limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(41, 20), 3);
        assert_eq!(page_count(40, 20), 2);
        assert_eq!(page_count(1, 20), 1);
    }

    #[test]
    fn page_count_is_one_for_empty() {
        assert_eq!(page_count(0, 20), 1);
    }

    #[test]
    fn page_window_defaults_and_caps() {
        assert_eq!(page_window(None, None), (1, 20, 0));
        assert_eq!(page_window(Some(3), Some(10)), (3, 10, 20));
        assert_eq!(page_window(Some(0), Some(1000)), (1, 100, 0));
    }

    #[test]
    fn list_envelope_carries_pagination() {
        let (_, body) = list(vec!["a", "b"], 12, 1, 5);
        assert!(body.success);
        assert_eq!(body.count, 2);
        assert_eq!(body.total, 12);
        assert_eq!(body.pages, 3);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 12);
    }
}
