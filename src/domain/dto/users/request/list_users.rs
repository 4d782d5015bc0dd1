//! 사용자 목록 조회 쿼리 DTO
//!
//! `GET /api/users?page=&limit=` 쿼리를 페이지 요청으로 변환합니다.
//! 잘못된 값은 에러가 아니라 기본값/경계값으로 보정됩니다.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// 앞부분 정수 (`"  -12abc"` → `-12`)
static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer pattern must compile"));

/// 원시 쿼리 파라미터
///
/// 숫자가 아닌 값도 거부하지 않도록 문자열로 받습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// 디코딩된 쿼리 쌍에서 `page`, `limit`를 각각 독립적으로 읽습니다.
    ///
    /// 같은 키가 반복되면 첫 번째 값을 사용하고, 나머지 키는 무시합니다.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// 보정된 페이지 요청
///
/// - `page` ≥ 1
/// - `1 ≤ limit ≤ 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// 값을 경계 안으로 보정하여 생성합니다.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }

    /// 건너뛸 문서 수
    ///
    /// MongoDB의 `skip`은 i64 범위이므로 `i64::MAX`에서 멈춥니다.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<ListUsersQuery> for PageRequest {
    fn from(query: ListUsersQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_PAGE as i64);
        let limit = query
            .limit
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_LIMIT as i64);

        Self::new(page, limit)
    }
}

/// 앞부분의 정수만 읽습니다 (`"10abc"` → 10, `"-3"` → -3, `"abc"` → None).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let number = LEADING_INT.captures(raw)?.get(1)?.as_str();
    match number.parse::<i64>() {
        Ok(value) => Some(value),
        // 자릿수가 너무 많으면 부호 방향의 극값으로 취급
        Err(_) if number.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
