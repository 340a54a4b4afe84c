use chrono::{TimeZone, Utc};
use tracing::info;

use crate::domain::models::{
    activity::Activity,
    campaign::Campaign,
    event::{Event, Location, Speaker, TicketType},
    user::User,
};
use crate::error::AppError;
use crate::state::AppState;

/// Seeds the demo dataset: two events, three activities, four users and two
/// newsletter campaigns. Matches what the frontend expects on first load.
pub async fn seed_demo_data(state: &AppState) -> Result<(), AppError> {
    for event in demo_events() {
        state.event_repo.insert(&event).await?;
    }
    for activity in demo_activities() {
        state.activity_repo.insert(&activity).await?;
    }
    for user in demo_users() {
        state.user_repo.insert(&user).await?;
    }
    for campaign in demo_campaigns() {
        state.campaign_repo.insert(&campaign).await?;
    }

    info!("Seeded demo data: 2 events, 3 activities, 4 users, 2 campaigns");
    Ok(())
}

fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: "evt_1".to_string(),
            title: "Sommerseminar 2025".to_string(),
            description: "Et fantastisk seminar om teknologi og innovasjon".to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 6, 12, 15, 0, 0).unwrap(),
            location: Location {
                venue: "Kulturhuset".to_string(),
                address: "Youngstorget 3".to_string(),
                city: "Oslo".to_string(),
                country: "NO".to_string(),
            },
            status: "open".to_string(),
            capacity: 150,
            registrations: 47,
            category: "Seminar".to_string(),
            ticket_types: vec![TicketType {
                id: "std".to_string(),
                name: "Standard".to_string(),
                price: 0,
                currency: "NOK".to_string(),
                capacity: 150,
            }],
            speakers: vec![
                Speaker {
                    id: "1".to_string(),
                    name: "Dr. Anna Hansen".to_string(),
                    bio: "Teknologiekspert og forsker".to_string(),
                },
                Speaker {
                    id: "2".to_string(),
                    name: "Lars Olsen".to_string(),
                    bio: "Innovasjonsleder i startup-miljøet".to_string(),
                },
            ],
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
        },
        Event {
            id: "evt_2".to_string(),
            title: "Høstkonferanse".to_string(),
            description: "Årlig konferanse for bransjens ledere".to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 9, 15, 8, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 9, 16, 17, 0, 0).unwrap(),
            location: Location {
                venue: "Radisson Blu".to_string(),
                address: "Strandkaien 7".to_string(),
                city: "Bergen".to_string(),
                country: "NO".to_string(),
            },
            status: "open".to_string(),
            capacity: 200,
            registrations: 89,
            category: "Konferanse".to_string(),
            ticket_types: vec![TicketType {
                id: "std".to_string(),
                name: "Standard".to_string(),
                price: 500,
                currency: "NOK".to_string(),
                capacity: 200,
            }],
            speakers: vec![Speaker {
                id: "3".to_string(),
                name: "Maria Svendsen".to_string(),
                bio: "Lederskap og strategi ekspert".to_string(),
            }],
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap(),
        },
    ]
}

fn demo_activities() -> Vec<Activity> {
    let seeded_at = Utc.with_ymd_and_hms(2025, 1, 3, 10, 0, 0).unwrap();
    vec![
        Activity {
            id: "act_1".to_string(),
            title: "Yoga for alle".to_string(),
            description: "Rolig yogatime med fokus på pust og bevegelse".to_string(),
            category: "Helse & Velvære".to_string(),
            duration: "60 minutter".to_string(),
            level: "Nybegynner".to_string(),
            instructor: "Ingrid Bakke".to_string(),
            schedule: "Tirsdager 18:00".to_string(),
            location: "Aktivitetshuset, sal 2".to_string(),
            status: "active".to_string(),
            created_at: seeded_at,
            updated_at: seeded_at,
        },
        Activity {
            id: "act_2".to_string(),
            title: "Kodekveld".to_string(),
            description: "Uformell programmeringskveld for medlemmer".to_string(),
            category: "Teknologi".to_string(),
            duration: "2 timer".to_string(),
            level: "Alle nivåer".to_string(),
            instructor: "Jonas Lie".to_string(),
            schedule: "Annenhver onsdag 17:30".to_string(),
            location: "Kontoret, møterom A".to_string(),
            status: "active".to_string(),
            created_at: seeded_at,
            updated_at: seeded_at,
        },
        Activity {
            id: "act_3".to_string(),
            title: "Løpegruppe".to_string(),
            description: "Felles løpetur i rolig tempo, avsluttes med kaffe".to_string(),
            category: "Sport".to_string(),
            duration: "45 minutter".to_string(),
            level: "Middels".to_string(),
            instructor: "Kari Moen".to_string(),
            schedule: "Lørdager 09:00".to_string(),
            location: "Frognerparken, hovedinngangen".to_string(),
            status: "inactive".to_string(),
            created_at: seeded_at,
            updated_at: seeded_at,
        },
    ]
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "user_1".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Hansen".to_string(),
            email: "anna.hansen@example.com".to_string(),
            phone: "+47 123 45 678".to_string(),
            role: "admin".to_string(),
            status: "active".to_string(),
            joined_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            last_login_at: Some(Utc.with_ymd_and_hms(2025, 1, 10, 14, 30, 0).unwrap()),
            events_attended: 12,
        },
        User {
            id: "user_2".to_string(),
            first_name: "Lars".to_string(),
            last_name: "Olsen".to_string(),
            email: "lars.olsen@example.com".to_string(),
            phone: "+47 987 65 432".to_string(),
            role: "member".to_string(),
            status: "active".to_string(),
            joined_at: Utc.with_ymd_and_hms(2024, 3, 20, 9, 15, 0).unwrap(),
            last_login_at: Some(Utc.with_ymd_and_hms(2025, 1, 9, 11, 20, 0).unwrap()),
            events_attended: 8,
        },
        User {
            id: "user_3".to_string(),
            first_name: "Kari".to_string(),
            last_name: "Nordahl".to_string(),
            email: "kari.nordahl@example.com".to_string(),
            phone: "+47 555 12 345".to_string(),
            role: "editor".to_string(),
            status: "active".to_string(),
            joined_at: Utc.with_ymd_and_hms(2024, 2, 10, 16, 45, 0).unwrap(),
            last_login_at: Some(Utc.with_ymd_and_hms(2025, 1, 8, 9, 10, 0).unwrap()),
            events_attended: 15,
        },
        User {
            id: "user_4".to_string(),
            first_name: "Erik".to_string(),
            last_name: "Svendsen".to_string(),
            email: "erik.svendsen@example.com".to_string(),
            phone: "+47 777 88 999".to_string(),
            role: "member".to_string(),
            status: "inactive".to_string(),
            joined_at: Utc.with_ymd_and_hms(2023, 11, 5, 12, 30, 0).unwrap(),
            last_login_at: Some(Utc.with_ymd_and_hms(2024, 12, 20, 15, 45, 0).unwrap()),
            events_attended: 3,
        },
    ]
}

fn demo_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "camp_1".to_string(),
            name: "Månedlig nyhetsbrev - August".to_string(),
            subject: "Nyheter og arrangementer denne måneden".to_string(),
            content: "Her er høydepunktene fra august.".to_string(),
            status: "sent".to_string(),
            scheduled_at: Some(Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap()),
            audience_id: "aud_1".to_string(),
        },
        Campaign {
            id: "camp_2".to_string(),
            name: "Invitasjon til sommerseminar".to_string(),
            subject: "Bli med på vårt eksklusive sommerseminar".to_string(),
            content: "Vi gleder oss til å se deg på Kulturhuset.".to_string(),
            status: "draft".to_string(),
            scheduled_at: None,
            audience_id: "aud_2".to_string(),
        },
    ]
}
