//! Filter vocabularies accepted by the musclesworked API.
//!
//! The server owns the taxonomy; these enums only pin down the wire strings
//! the `find_exercises` endpoint understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of string values with a stable wire form.
pub trait Choice: Sized + Copy + 'static {
    /// Every accepted value, in documentation order.
    const ALL: &'static [Self];

    /// Wire representation.
    fn as_str(&self) -> &'static str;

    /// Wire representations of every accepted value.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.as_str()).collect()
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Equipment an exercise is performed with.
    Equipment {
        Barbell => "barbell",
        Dumbbell => "dumbbell",
        Kettlebell => "kettlebell",
        Cable => "cable",
        Machine => "machine",
        Bodyweight => "bodyweight",
        Band => "band",
        SmithMachine => "smith_machine",
        TrapBar => "trap_bar",
        EzBar => "ez_bar",
        Suspension => "suspension",
        MedicineBall => "medicine_ball",
        Plate => "plate",
        Landmine => "landmine",
        None => "none",
    }
}

choice_enum! {
    /// Skill level.
    Difficulty {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

choice_enum! {
    /// Movement pattern of an exercise.
    MovementPattern {
        HorizontalPush => "horizontal_push",
        HorizontalPull => "horizontal_pull",
        VerticalPush => "vertical_push",
        VerticalPull => "vertical_pull",
        Squat => "squat",
        Hinge => "hinge",
        Lunge => "lunge",
        Carry => "carry",
        Rotation => "rotation",
        AntiRotation => "anti_rotation",
        Flexion => "flexion",
        Extension => "extension",
        Isolation => "isolation",
        Abduction => "abduction",
        Adduction => "adduction",
    }
}

choice_enum! {
    ExerciseType {
        Compound => "compound",
        Isolation => "isolation",
        Isometric => "isometric",
    }
}

choice_enum! {
    /// How a muscle participates in an exercise.
    MuscleRole {
        Primary => "primary",
        Secondary => "secondary",
        Stabilizer => "stabilizer",
    }
}
