use constcat::concat;
use serde::{Deserialize, Serialize};

use crate::api::user::Role;

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/signIn";
pub const DASHBOARD: &str = "/dashboard";

const BOOK_PARCEL: &str = concat!(DASHBOARD, "/book-parcel");
const MY_PARCELS: &str = concat!(DASHBOARD, "/my-parcels");
const MY_PROFILE: &str = concat!(DASHBOARD, "/my-profile");
const STATISTICS: &str = concat!(DASHBOARD, "/statistics");
const ALL_PARCELS: &str = concat!(DASHBOARD, "/all-parcels");
const ALL_USERS: &str = concat!(DASHBOARD, "/all-users");
const ALL_DELIVERY_MEN: &str = concat!(DASHBOARD, "/all-delivery-men");
const MY_DELIVERY_LIST: &str = concat!(DASHBOARD, "/my-delivery-list");
const MY_REVIEWS: &str = concat!(DASHBOARD, "/my-reviews");

/// Sub-view mounted under the dashboard root.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    BookParcel,
    MyParcels,
    MyProfile,
    Statistics,
    AllParcels,
    AllUsers,
    AllDeliveryMen,
    MyDeliveryList,
    MyReviews,
}

impl View {
    pub const ALL: [Self; 9] = [
        Self::BookParcel,
        Self::MyParcels,
        Self::MyProfile,
        Self::Statistics,
        Self::AllParcels,
        Self::AllUsers,
        Self::AllDeliveryMen,
        Self::MyDeliveryList,
        Self::MyReviews,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::BookParcel => BOOK_PARCEL,
            Self::MyParcels => MY_PARCELS,
            Self::MyProfile => MY_PROFILE,
            Self::Statistics => STATISTICS,
            Self::AllParcels => ALL_PARCELS,
            Self::AllUsers => ALL_USERS,
            Self::AllDeliveryMen => ALL_DELIVERY_MEN,
            Self::MyDeliveryList => MY_DELIVERY_LIST,
            Self::MyReviews => MY_REVIEWS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BookParcel => "Book Parcel",
            Self::MyParcels => "My Parcels",
            Self::MyProfile => "My Profile",
            Self::Statistics => "Statistics",
            Self::AllParcels => "All Parcels",
            Self::AllUsers => "All Users",
            Self::AllDeliveryMen => "All Delivery Men",
            Self::MyDeliveryList => "My Delivery List",
            Self::MyReviews => "My Reviews",
        }
    }

    /// Looks up the view mounted at `path`, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|view| view.path() == path)
    }
}

impl Role {
    /// View a role lands on when entering the bare dashboard root.
    pub const fn landing(self) -> View {
        match self {
            Self::Admin => View::Statistics,
            Self::User => View::BookParcel,
            Self::DeliveryMen => View::MyDeliveryList,
        }
    }

    /// Sidebar views of a role, in display order.
    pub const fn views(self) -> &'static [View] {
        match self {
            Self::User => &[View::BookParcel, View::MyParcels, View::MyProfile],
            Self::DeliveryMen => &[View::MyDeliveryList, View::MyReviews],
            Self::Admin => &[
                View::Statistics,
                View::AllParcels,
                View::AllUsers,
                View::AllDeliveryMen,
            ],
        }
    }

    pub fn navigation(self) -> Vec<NavigationEntry> {
        self.views().iter().copied().map(NavigationEntry::from).collect()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
}

impl From<View> for NavigationEntry {
    fn from(view: View) -> Self {
        Self {
            path: view.path().to_string(),
            label: view.label().to_string(),
        }
    }
}

/// What the dashboard renders once access is granted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Layout {
    pub role: Role,
    pub view: View,
    pub navigation: Vec<NavigationEntry>,
}

impl Layout {
    pub fn new(role: Role, view: View) -> Self {
        Self {
            role,
            view,
            navigation: role.navigation(),
        }
    }
}
