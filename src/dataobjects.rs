/// Personal bio shown at the top of the page
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Profile {
    pub name: String,
    pub role: String,
    pub contact: Contact,
    /// Picture URL, relative to the page
    pub pic: String,
    pub skills: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Contact {
    pub mobile: String,
    pub email: String,
    /// GitHub handle
    pub github: String,
    pub location: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Employment {
    pub position: String,
    pub employer: String,
    pub years_of_employment: u32,
    pub city: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Education {
    pub university: String,
    pub degree: String,
    pub years_of_attendance: u32,
}
