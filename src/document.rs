//-
//- Rendering a page is two steps:
//-  - Format each record into labeled fragments (pure, no host involved)
//-  - Append the fragments, punctuated, into the record's container
//-
//- Appending is not idempotent. Rendering a record twice into the same
//- container leaves two copies behind.

use crate::container::Host;
use crate::dataobjects::*;
use crate::error::PageError;

/// How fragments are joined and how the picture is sized
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub line_break: String,
    pub picture_width: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            line_break: "<br>".into(),
            picture_width: 100,
        }
    }
}

impl Layout {
    /// Line break after every fragment but the last
    pub fn punctuate(&self, fragments: Vec<String>) -> Vec<String> {
        let last = fragments.len().saturating_sub(1);
        fragments
            .into_iter()
            .enumerate()
            .map(|(i, fragment)| {
                if i < last {
                    fragment + &self.line_break
                } else {
                    fragment
                }
            })
            .collect()
    }
}

/// A record that knows which container it goes into and how to read as text
pub(crate) trait Section {
    const TARGET: &'static str;

    /// Labeled lines in declaration order, without separators
    fn fragments(&self, layout: &Layout) -> Vec<String>;
}

impl Section for Profile {
    const TARGET: &'static str = "bio";

    fn fragments(&self, layout: &Layout) -> Vec<String> {
        vec![
            format!("<img src=\"{}\" width=\"{}\">", self.pic, layout.picture_width),
            format!("Name: {}", self.name),
            format!("Role: {}", self.role),
            format!("Mobile: {}", self.contact.mobile),
            format!("Email: {}", self.contact.email),
            format!("GitHub: {}", self.contact.github),
            format!("Location: {}", self.contact.location),
            format!("Skills: {}", self.skills.join(", ")),
        ]
    }
}

impl Section for Employment {
    const TARGET: &'static str = "work";

    fn fragments(&self, _layout: &Layout) -> Vec<String> {
        vec![
            format!("Position: {}", self.position),
            format!("Employer: {}", self.employer),
            format!("Years of Employment: {}", self.years_of_employment),
            format!("City: {}", self.city),
        ]
    }
}

impl Section for Education {
    const TARGET: &'static str = "education";

    fn fragments(&self, _layout: &Layout) -> Vec<String> {
        vec![
            format!("University: {}", self.university),
            format!("Degree: {}", self.degree),
            format!("Years of Attendance: {}", self.years_of_attendance),
        ]
    }
}

/// Appends `section` into its container on `host`
pub(crate) fn render_into<S: Section>(
    host: &mut dyn Host,
    section: &S,
    layout: &Layout,
) -> Result<(), PageError> {
    let fragments = layout.punctuate(section.fragments(layout));
    tracing::debug!("rendering {} fragments into #{}", fragments.len(), S::TARGET);

    let container = host.lookup(S::TARGET)?;
    for fragment in &fragments {
        container.append(fragment);
    }
    Ok(())
}

#[derive(Default, Debug, Clone)]
pub(crate) struct Resume {
    pub bio: Profile,
    pub work: Employment,
    pub education: Education,
}

impl Resume {
    pub const TARGETS: [&'static str; 3] = [Profile::TARGET, Employment::TARGET, Education::TARGET];

    /// Bio, then work, then education; stops at the first missing container
    pub fn render(&self, host: &mut dyn Host, layout: &Layout) -> Result<(), PageError> {
        render_into(host, &self.bio, layout)?;
        render_into(host, &self.work, layout)?;
        render_into(host, &self.education, layout)?;
        Ok(())
    }
}
