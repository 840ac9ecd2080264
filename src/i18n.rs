//! English/Korean message catalog.
//!
//! # Purpose
//! User-facing strings live here as a flat key-value table per language. The
//! language is a request-scoped value decoded from an explicit query
//! parameter, never ambient state, so two concurrent requests in different
//! languages cannot interfere.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Kr,
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Lang::En),
            "kr" => Ok(Lang::Kr),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("event_header", "Upcoming Events"),
    ("event_join", "Join"),
    ("event_joined", "Joined!"),
    ("event_full", "This event is already full."),
    ("already_joined", "You have already joined this event."),
    ("event_not_found", "Event not found."),
    ("user_not_registered", "Please register before joining events."),
    ("reg_success", "Registration Successful! Welcome, "),
    ("participants", "participants"),
    ("stats_visitors", "Today's Visitors"),
    ("stats_users", "Total Members"),
];

const KR: &[(&str, &str)] = &[
    ("event_header", "진행 중인 이벤트"),
    ("event_join", "참여하기"),
    ("event_joined", "참여 완료!"),
    ("event_full", "이 이벤트는 정원이 가득 찼습니다."),
    ("already_joined", "이미 참여한 이벤트입니다."),
    ("event_not_found", "이벤트를 찾을 수 없습니다."),
    ("user_not_registered", "이벤트 참여 전에 회원가입을 해주세요."),
    ("reg_success", "가입 완료! 환영합니다, "),
    ("participants", "명 참여 중"),
    ("stats_visitors", "오늘 방문자 수"),
    ("stats_users", "총 가입 멤버"),
];

/// Look up a message for a language. Unknown keys fall back to the key
/// itself so a missing translation shows up in the UI instead of erroring.
pub fn text(lang: Lang, key: &str) -> &str {
    let table = match lang {
        Lang::En => EN,
        Lang::Kr => KR,
    };
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, message)| *message)
        .unwrap_or(key)
}
