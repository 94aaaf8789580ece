//! Prompt construction for the emotion-analysis request.

/// Builds the analyst prompt for one journal entry.
///
/// The prompt pins the response contract: exactly three emotions under
/// `"감정"` and a per-emotion plan under `"액션리스트"`, answered as a single
/// JSON object.
pub fn analysis_prompt(entry_text: &str) -> String {
    format!(
        r#"너는 감정 분석가야.
아래의 사용자가 작성한 일기에서 느껴지는 감정을 한글로 3개 추출해줘.
그리고 각 감정에 대해, 부정적이면 회복할 수 있는 액션 플랜을, 긍정적이면 극대화할 수 있는 액션 플랜을 한글로 제안해줘.
각 감정의 액션 플랜에는 카테고리별 액션 목록, 핵심팁 한 줄, 시간대별 루틴을 포함해줘.

반드시 아래 형식의 JSON 객체 하나로만 답해줘:
{{
  "감정": ["기쁨", "불안", "감사"],
  "액션리스트": {{
    "기쁨": {{
      "카테고리": [
        {{"이름": "기록", "액션": [{{"액션": "좋았던 순간을 기록하기", "설명": "구체적인 장면을 적기", "소요시간": "10분"}}]}}
      ],
      "핵심팁": "좋은 감정은 나눌수록 커져",
      "루틴": [{{"시간대": "저녁", "내용": "하루의 좋았던 일 세 가지 적기", "도구": "노트"}}]
    }}
  }}
}}

사용자 입력:
{entry_text}
"#
    )
}
