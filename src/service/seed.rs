//! Built-in event catalog used by the admin seed operation.
use crate::model::{Event, ScheduleItem};

/// Default events inserted when the events collection is empty.
pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: String::new(),
            title_en: "Welcome Party".to_string(),
            title_kr: "환영 파티".to_string(),
            date: "2026-09-05".to_string(),
            location: "Student Hall".to_string(),
            image: "https://picsum.photos/seed/welcome/600/400".to_string(),
            duration_hours: 3,
            current_participants: 0,
            max_participants: 100,
            participant_names: Vec::new(),
            schedule: vec![
                ScheduleItem {
                    time: "18:00".to_string(),
                    activity_en: "Opening & icebreakers".to_string(),
                    activity_kr: "오프닝 & 아이스브레이킹".to_string(),
                },
                ScheduleItem {
                    time: "19:00".to_string(),
                    activity_en: "Dinner & networking".to_string(),
                    activity_kr: "저녁 식사 & 네트워킹".to_string(),
                },
            ],
        },
        Event {
            id: String::new(),
            title_en: "Board Game Night".to_string(),
            title_kr: "보드게임 나이트".to_string(),
            date: "2026-09-12".to_string(),
            location: "Community Lounge".to_string(),
            image: "https://picsum.photos/seed/boardgames/600/400".to_string(),
            duration_hours: 2,
            current_participants: 0,
            max_participants: 24,
            participant_names: Vec::new(),
            schedule: vec![ScheduleItem {
                time: "19:30".to_string(),
                activity_en: "Open tables".to_string(),
                activity_kr: "자유 게임".to_string(),
            }],
        },
        Event {
            id: String::new(),
            title_en: "City Tour".to_string(),
            title_kr: "시티 투어".to_string(),
            date: "2026-09-20".to_string(),
            location: "Main Gate".to_string(),
            image: "https://picsum.photos/seed/citytour/600/400".to_string(),
            duration_hours: 5,
            current_participants: 0,
            max_participants: 30,
            participant_names: Vec::new(),
            schedule: Vec::new(),
        },
    ]
}
