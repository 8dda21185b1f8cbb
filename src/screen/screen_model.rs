use serde::Serialize;

use crate::directory::record_model::Hospital;

/// Label on a card's view button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewBadge {
    View,
    Viewed,
}

impl ViewBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ViewBadge::View => "View",
            ViewBadge::Viewed => "Viewed",
        }
    }
}

/// One rendered hospital card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalCard {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub beds: String,
    pub image: String,
    pub badge: ViewBadge,
}

impl HospitalCard {
    pub fn new(hospital: &Hospital, viewed: bool) -> Self {
        Self {
            id: hospital.id.clone(),
            name: hospital.name.clone(),
            address: hospital.address.clone(),
            phone: hospital.phone.clone(),
            beds: hospital.beds_display(),
            image: hospital.image.clone(),
            badge: if viewed { ViewBadge::Viewed } else { ViewBadge::View },
        }
    }
}
