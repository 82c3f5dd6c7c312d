// 금지어 필터
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

pub const CENSORED: &str = "****";

/// 공백 하나로 나눈 단어 중 금지어(대소문자 무시)를 `****` 로 교체
/// Replace profane words, split on single spaces and matched case-insensitively.
/// Punctuation attached to a word keeps it from matching.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                CENSORED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
