// Eligibility predicates deciding which profiles may be matched with a target
use crate::profile::{Profile, SocialType, StudyHabit};

pub trait Eligibility {
    fn is_eligible(&self, target: &Profile, candidate: &Profile) -> bool;
}

impl<F> Eligibility for F
where
    F: Fn(&Profile, &Profile) -> bool,
{
    fn is_eligible(&self, target: &Profile, candidate: &Profile) -> bool {
        self(target, candidate)
    }
}

/// Default policy: the candidate shares the target's gender category
#[derive(Debug, Clone, Copy, Default)]
pub struct SameGender;

impl Eligibility for SameGender {
    fn is_eligible(&self, target: &Profile, candidate: &Profile) -> bool {
        target.gender_category == candidate.gender_category
    }
}

#[derive(Debug, Clone)]
pub enum EligibilityCondition {
    Any,
    SameGender,
    SocialType(SocialType),
    StudyHabit(StudyHabit),
    SharesLanguage,
    MinCleanliness(u8),
    And(Vec<EligibilityCondition>),
    Or(Vec<EligibilityCondition>),
    Not(Box<EligibilityCondition>),
}

impl EligibilityCondition {
    fn matches(&self, target: &Profile, candidate: &Profile) -> bool {
        match self {
            EligibilityCondition::Any => true,
            EligibilityCondition::SameGender => SameGender.is_eligible(target, candidate),
            EligibilityCondition::SocialType(social) => candidate.social_type == *social,
            EligibilityCondition::StudyHabit(habit) => candidate.study_habit == *habit,
            EligibilityCondition::SharesLanguage => {
                !target.languages.is_disjoint(&candidate.languages)
            }
            EligibilityCondition::MinCleanliness(min) => candidate.cleanliness >= *min,
            EligibilityCondition::And(conditions) => {
                conditions.iter().all(|c| c.matches(target, candidate))
            }
            EligibilityCondition::Or(conditions) => {
                conditions.iter().any(|c| c.matches(target, candidate))
            }
            EligibilityCondition::Not(condition) => !condition.matches(target, candidate),
        }
    }
}

impl Eligibility for EligibilityCondition {
    fn is_eligible(&self, target: &Profile, candidate: &Profile) -> bool {
        self.matches(target, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Profile, Profile) {
        let target = Profile::new("t", "female").with_languages(["English", "Hindi"]);
        let candidate = Profile::new("c", "female")
            .with_social_type(SocialType::Extrovert)
            .with_study_habit(StudyHabit::Group)
            .with_cleanliness(8)
            .with_languages(["Hindi"]);
        (target, candidate)
    }

    #[test]
    fn test_same_gender() {
        let (target, candidate) = pair();
        assert!(SameGender.is_eligible(&target, &candidate));
        let other = Profile::new("o", "male");
        assert!(!SameGender.is_eligible(&target, &other));
    }

    #[test]
    fn test_closure_predicate() {
        let (target, candidate) = pair();
        let never = |_: &Profile, _: &Profile| false;
        assert!(!never.is_eligible(&target, &candidate));
    }

    #[test]
    fn test_composed_conditions() {
        let (target, candidate) = pair();
        let cond = EligibilityCondition::And(vec![
            EligibilityCondition::SameGender,
            EligibilityCondition::SharesLanguage,
            EligibilityCondition::MinCleanliness(7),
            EligibilityCondition::Not(Box::new(EligibilityCondition::StudyHabit(
                StudyHabit::Quiet,
            ))),
        ]);
        assert!(cond.is_eligible(&target, &candidate));

        let introverts = EligibilityCondition::Or(vec![
            EligibilityCondition::SocialType(SocialType::Introvert),
            EligibilityCondition::MinCleanliness(10),
        ]);
        assert!(!introverts.is_eligible(&target, &candidate));
        assert!(EligibilityCondition::Any.is_eligible(&target, &candidate));
    }
}
