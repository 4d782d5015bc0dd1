//! # 문자열 유틸리티
//!
//! 사용자 레코드 정규화에 쓰이는 공통 문자열 함수들입니다.
//! 생성과 수정 경로가 모두 같은 함수를 호출하므로, 저장되는 값의 형태가
//! 어떤 경로로 들어왔는지와 무관하게 동일하게 유지됩니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 정규화
///
/// 앞뒤 공백을 제거하고 소문자로 변환합니다.
/// 유니크 인덱스는 정규화된 값을 기준으로 동작하므로
/// `Alice@Example.com`과 `alice@example.com`은 같은 이메일로 취급됩니다.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 문자열 목록 정규화
///
/// 각 항목의 앞뒤 공백을 제거하고, 결과가 빈 문자열인 항목은 버립니다.
/// 순서는 그대로 유지됩니다.
///
/// # 인자
/// * `values` - 정규화할 문자열 목록 (skills, interests, learningGoals)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_string_list;
///
/// let skills = vec!["  rust ".to_string(), "".to_string(), "   ".to_string(), "go".to_string()];
/// assert_eq!(normalize_string_list(skills), vec!["rust", "go"]);
/// ```
pub fn normalize_string_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
