pub mod limits {

    pub const MAX_NAME_LEN: usize = 128;

    pub const MAX_RANK_LEN: usize = 64;

    pub const MAX_PASSPORT_LEN: usize = 32;

    pub const MAX_NATIONALITY_LEN: usize = 64;

    pub const MAX_VESSEL_TYPE_LEN: usize = 128;

    pub const MAX_USERNAME_LEN: usize = 64;

    pub const MAX_YEARS_EXPERIENCE: i32 = 80;
}

pub mod session {

    /// Session key holding the logged-in admin's username.
    pub const ADMIN_KEY: &str = "admin";
}

/// Date format accepted for optional registration dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
