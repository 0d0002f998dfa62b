use crate::dataobjects::*;

pub(crate) fn bio() -> Profile {
    Profile {
        name: "Marios Sofokleous".into(),
        role: "Web Developer".into(),
        contact: Contact {
            mobile: "99-111844".into(),
            email: "marios.sofokleous@yandex.com".into(),
            github: "PictureElement".into(),
            location: "Pafos".into(),
        },
        pic: "../images/100x100.png".into(),
        skills: vec!["HTML".into(), "CSS".into(), "JavaScript".into(), "WordPress.org".into()],
    }
}

pub(crate) fn work() -> Employment {
    let mut work = Employment::default();
    work.position = "Web Developer".into();
    work.employer = "Linux Foundation".into();
    work.years_of_employment = 2;
    work.city = "Los Angeles".into();
    work
}

pub(crate) fn education() -> Education {
    Education {
        university: "University of Cyprus".into(),
        degree: "Computer Engineering".into(),
        years_of_attendance: 5,
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn bio_has_four_skills_in_order() {
        let bio = super::bio();
        assert_eq!(bio.skills, vec!["HTML", "CSS", "JavaScript", "WordPress.org"]);
        assert_eq!(bio.contact.github, "PictureElement");
    }

    #[test]
    fn work_is_fully_assigned() {
        let work = super::work();
        assert_eq!(work.position, "Web Developer");
        assert_eq!(work.employer, "Linux Foundation");
        assert_eq!(work.years_of_employment, 2);
        assert_eq!(work.city, "Los Angeles");
    }
}
