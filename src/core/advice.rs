use crate::core::Gender;
use crate::core::report::Status;

pub fn recommend(status: Status, gender: Gender) -> &'static str {
    match (gender, status) {
        (Gender::Male, Status::Excellent) => {
            "Maintain routine; include resistance training 2–3× per week; ensure protein intake across meals."
        }
        (Gender::Male, Status::Good) => {
            "Improve recovery with an earlier bedtime; add 15 min of light cardio or stretching; keep hydration steady."
        }
        (Gender::Male, Status::Fair) => {
            "Aim for +1 hour of sleep; reduce caffeine after noon; schedule light mobility or an easy walk."
        }
        (Gender::Male, Status::Poor) => {
            "Rest today; avoid strenuous workouts; focus on hydration and 20–30 min of gentle walking."
        }
        (Gender::Female, Status::Excellent) => {
            "Keep strong habits; add yoga/pilates for recovery; prioritize calcium + vitamin D intake."
        }
        (Gender::Female, Status::Good) => {
            "Boost energy with a balanced breakfast; add 15 min of walking; focus on iron-rich foods if feeling low."
        }
        (Gender::Female, Status::Fair) => {
            "Increase sleep consistency; reduce evening screen time; include calming routines like meditation or journaling."
        }
        (Gender::Female, Status::Poor) => {
            "Prioritize rest and self-care; consider a short nap if possible; gentle yoga/stretching only."
        }
    }
}
