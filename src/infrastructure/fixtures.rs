//! Seed data for a fresh session
//!
//! Three accounts (one per role), three containers, three warehouses that
//! cover each stored status, and two feedback items.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Container, ContainerStatus, Dimensions, Feedback, FeedbackStatus, FeedbackType, User,
    UserRole, Warehouse, WarehouseStatus,
};
use crate::infrastructure::crypto::password::hash_password;

/// Seed collections in display order
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub containers: Vec<Container>,
    pub warehouses: Vec<Warehouse>,
    pub feedbacks: Vec<Feedback>,
}

impl Fixtures {
    pub fn load() -> Self {
        Self {
            users: users(),
            containers: containers(),
            warehouses: warehouses(),
            feedbacks: feedbacks(),
        }
    }

    /// Hash `password` once per seeded user, keyed by user id.
    pub fn credentials(
        &self,
        password: &str,
        cost: u32,
    ) -> Result<HashMap<String, String>, bcrypt::BcryptError> {
        self.users
            .iter()
            .map(|u| hash_password(password, cost).map(|hash| (u.id.clone(), hash)))
            .collect()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            username: "admin".into(),
            email: "admin@container.com".into(),
            role: UserRole::Admin,
            name: "Administrator".into(),
            created_at: at(2024, 1, 1, 0, 0),
            is_active: true,
        },
        User {
            id: "2".into(),
            username: "staff1".into(),
            email: "staff1@container.com".into(),
            role: UserRole::Staff,
            name: "Nguyen Van A".into(),
            created_at: at(2024, 1, 2, 0, 0),
            is_active: true,
        },
        User {
            id: "3".into(),
            username: "user1".into(),
            email: "user1@container.com".into(),
            role: UserRole::User,
            name: "Tran Thi B".into(),
            created_at: at(2024, 1, 3, 0, 0),
            is_active: true,
        },
    ]
}

fn containers() -> Vec<Container> {
    vec![
        Container {
            id: "1".into(),
            code: "CONT-001".into(),
            container_type: "20ft Standard".into(),
            status: ContainerStatus::InTransit,
            warehouse_id: "1".into(),
            notes: "Electronics, keep dry".into(),
            location: "En route from Hai Phong".into(),
            weight: 15000.0,
            dimensions: Dimensions { length: 6.0, width: 2.4, height: 2.6 },
            created_at: at(2024, 1, 15, 8, 0),
            updated_at: at(2024, 1, 15, 14, 30),
            last_updated_by: "staff1".into(),
        },
        Container {
            id: "2".into(),
            code: "CONT-002".into(),
            container_type: "40ft High Cube".into(),
            status: ContainerStatus::Arrived,
            warehouse_id: "1".into(),
            notes: "Food cargo, temperature checked".into(),
            location: "Warehouse A - Bay A1-01".into(),
            weight: 25000.0,
            dimensions: Dimensions { length: 12.0, width: 2.4, height: 2.9 },
            created_at: at(2024, 1, 14, 10, 0),
            updated_at: at(2024, 1, 15, 9, 15),
            last_updated_by: "staff1".into(),
        },
        Container {
            id: "3".into(),
            code: "CONT-003".into(),
            container_type: "20ft Standard".into(),
            status: ContainerStatus::Incident,
            warehouse_id: "2".into(),
            notes: "Incident on the road, cargo needs inspection".into(),
            location: "Km 45, National Route 1A".into(),
            weight: 18000.0,
            dimensions: Dimensions { length: 6.0, width: 2.4, height: 2.6 },
            created_at: at(2024, 1, 13, 6, 0),
            updated_at: at(2024, 1, 15, 11, 45),
            last_updated_by: "staff1".into(),
        },
    ]
}

fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: "1".into(),
            name: "Hanoi Central".into(),
            location: "Km 8, National Route 5, Hanoi".into(),
            capacity: 100,
            current_load: 75,
            status: WarehouseStatus::Available,
            containers: vec!["1".into(), "2".into()],
        },
        Warehouse {
            id: "2".into(),
            name: "Hai Phong Port".into(),
            location: "Hai Phong Port, Hai Phong".into(),
            capacity: 150,
            current_load: 140,
            status: WarehouseStatus::Full,
            containers: vec!["3".into()],
        },
        Warehouse {
            id: "3".into(),
            name: "Ho Chi Minh City".into(),
            location: "Tan Thuan Industrial Zone, Ho Chi Minh City".into(),
            capacity: 80,
            current_load: 85,
            status: WarehouseStatus::Overloaded,
            containers: Vec::new(),
        },
    ]
}

fn feedbacks() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "1".into(),
            user_id: "3".into(),
            user_name: "Tran Thi B".into(),
            container_id: Some("1".into()),
            message: "CONT-001 is past its expected arrival, please update.".into(),
            feedback_type: FeedbackType::Complaint,
            status: FeedbackStatus::Pending,
            created_at: at(2024, 1, 15, 13, 30),
            response: None,
            responded_by: None,
            responded_at: None,
        },
        Feedback {
            id: "2".into(),
            user_id: "3".into(),
            user_name: "Tran Thi B".into(),
            container_id: None,
            message: "Suggest real-time notifications for customers.".into(),
            feedback_type: FeedbackType::Suggestion,
            status: FeedbackStatus::Reviewed,
            created_at: at(2024, 1, 14, 16, 20),
            response: Some("Thanks, we will look into it.".into()),
            responded_by: Some("admin".into()),
            responded_at: Some(at(2024, 1, 15, 9, 0)),
        },
    ]
}
