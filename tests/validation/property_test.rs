#[cfg(test)]
mod tests {
    use med_records::models::person::FULL_NAME_MAX_CHARS;
    use med_records::models::{DoctorCategory, HealthGroup, Profession, Token};
    use med_records::validation::FieldPattern;
    use med_records::validation::rules::{bounded_int, pattern, truncated_text};
    use med_records::{IdSequence, Person};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn birthday_shape_is_accepted(value in "[0-9]{2}\\.[0-9]{2}\\.[0-9]{4}") {
            prop_assert!(pattern(&value, FieldPattern::Date).is_valid());
        }

        #[test]
        fn birthday_wrong_separator_is_rejected(value in "[0-9]{2}[-/ ][0-9]{2}[-/ ][0-9]{4}") {
            prop_assert!(pattern(&value, FieldPattern::Date).rejection().is_some());
        }

        #[test]
        fn birthday_wrong_digit_count_is_rejected(
            day in "[0-9]{1,3}",
            month in "[0-9]{1,3}",
            year in "[0-9]{1,5}",
        ) {
            let value = format!("{day}.{month}.{year}");
            let shaped = day.len() == 2 && month.len() == 2 && year.len() == 4;
            prop_assert_eq!(pattern(&value, FieldPattern::Date).is_valid(), shaped);
        }

        #[test]
        fn birthday_letters_are_rejected(value in "[a-zа-я]{2}\\.[0-9]{2}\\.[0-9]{4}") {
            prop_assert!(!pattern(&value, FieldPattern::Date).is_valid());
        }

        #[test]
        fn bounded_int_accepts_exactly_the_range(
            value in -1000i64..1000,
            min in -50i64..50,
            span in 0i64..100,
        ) {
            let max = min + span;
            let outcome = bounded_int(&value.to_string(), min..=max);
            prop_assert_eq!(outcome.is_valid(), (min..=max).contains(&value));
        }

        #[test]
        fn bounded_int_boundaries(min in -50i64..50, span in 0i64..100) {
            let max = min + span;
            prop_assert!(bounded_int(&min.to_string(), min..=max).is_valid());
            prop_assert!(bounded_int(&max.to_string(), min..=max).is_valid());
            prop_assert!(!bounded_int(&(min - 1).to_string(), min..=max).is_valid());
            prop_assert!(!bounded_int(&(max + 1).to_string(), min..=max).is_valid());
        }

        #[test]
        fn full_name_is_truncated_to_limit(name in "[а-яА-Яa-z ]{1,60}") {
            let kept = truncated_text(&name, FULL_NAME_MAX_CHARS).into_option().unwrap();
            let count = name.chars().count();
            if count <= FULL_NAME_MAX_CHARS {
                prop_assert_eq!(&kept, &name);
            } else {
                prop_assert_eq!(kept.chars().count(), FULL_NAME_MAX_CHARS);
                prop_assert!(name.starts_with(&kept));
            }
        }

        #[test]
        fn person_setter_truncates(name in "[а-я]{26,40}") {
            let mut person = Person::empty(IdSequence::new().next_id());
            prop_assert!(person.set_full_name(&name).is_ok());
            prop_assert_eq!(
                person.full_name().map(|n| n.chars().count()),
                Some(FULL_NAME_MAX_CHARS)
            );
        }

        #[test]
        fn enumerations_ignore_case(upper in any::<bool>()) {
            for group in HealthGroup::ALL {
                let token = if upper { group.as_str().to_uppercase() } else { group.as_str().to_lowercase() };
                prop_assert_eq!(HealthGroup::from_token(&token), Some(*group));
            }
            for category in DoctorCategory::ALL {
                let token = if upper { category.as_str().to_uppercase() } else { category.as_str().to_string() };
                prop_assert_eq!(DoctorCategory::from_token(&token), Some(*category));
            }
            let nurse = if upper { "МЕДСЕСТРА" } else { "медсестра" };
            prop_assert_eq!(Profession::from_token(nurse), Some(Profession::Nurse));
        }
    }
}
