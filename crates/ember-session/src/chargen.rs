//! Character-creation wizard state machine
//!
//! The wizard walks Name → Race → Class → Birth Sign → Review. Progress is
//! tracked by a monotone [`CreationStage`]; once the player has reached the
//! review screen, finishing any dialog returns straight to review instead
//! of marching forward again. The class step offers three paths: pick a
//! preset class, build a custom one, or answer a question sequence that
//! generates one.

/// How far character creation has progressed. Only ever advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CreationStage {
    NotStarted,
    NameChosen,
    RaceChosen,
    ClassChosen,
    BirthSignChosen,
    /// The review screen has been reached; completed dialogs jump back to it.
    ReviewNext,
}

/// Which dialog the UI should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    None,
    Name,
    Race,
    ClassChoice,
    PickClass,
    CreateClass,
    /// Class-generation question; the payload is the question index.
    GenerateClassQuestion(usize),
    GenerateClassResult,
    BirthSign,
    Review,
}

/// Class specialization, also the axis the generation questions score on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialization {
    Combat,
    Magic,
    Stealth,
}

/// Choice made on the class-choice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPath {
    GenerateClass,
    PickClass,
    CreateClass,
    Back,
}

/// Dialog re-opened from the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTarget {
    Name,
    Race,
    Class,
    BirthSign,
}

/// One back/next/ok input from a wizard dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum ChargenEvent {
    Start,
    NameEntered(String),
    RaceDone(String),
    RaceBack,
    ClassChoice(ClassPath),
    PickClassDone(String),
    PickClassBack,
    CreateClassDone(String),
    CreateClassBack,
    /// Answer to the current generation question.
    QuestionAnswered(Specialization),
    GenerateBack,
    /// Accept (`true`) or reject the generated class.
    GenerateDone(bool),
    BirthSignDone(String),
    BirthSignBack,
    ReviewDone,
    ReviewBack,
    ReviewActivate(ReviewTarget),
}

/// The finished character, emitted when the review screen is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub name: String,
    pub race: String,
    pub class_name: String,
    pub birth_sign: String,
}

/// Number of questions in the class-generation sequence.
pub const GENERATE_QUESTIONS: usize = 10;

/// Character-creation wizard controller.
pub struct CharGen {
    stage: CreationStage,
    name: String,
    race: String,
    class_name: String,
    birth_sign: String,
    question: usize,
    // Answer counters, indexed Combat/Magic/Stealth.
    specializations: [u32; 3],
    sheet: Option<CharacterSheet>,
}

impl CharGen {
    pub fn new() -> Self {
        Self {
            stage: CreationStage::NotStarted,
            name: String::new(),
            race: String::new(),
            class_name: String::new(),
            birth_sign: String::new(),
            question: 0,
            specializations: [0; 3],
            sheet: None,
        }
    }

    pub fn stage(&self) -> CreationStage {
        self.stage
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn birth_sign(&self) -> &str {
        &self.birth_sign
    }

    /// The finished character, once `ReviewDone` has been handled.
    pub fn sheet(&self) -> Option<&CharacterSheet> {
        self.sheet.as_ref()
    }

    /// The class the question answers currently point at. Ties resolve in
    /// Combat > Magic > Stealth order.
    pub fn generated_class(&self) -> Specialization {
        let [combat, magic, stealth] = self.specializations;
        if combat >= magic && combat >= stealth {
            Specialization::Combat
        } else if magic >= stealth {
            Specialization::Magic
        } else {
            Specialization::Stealth
        }
    }

    fn advance(&mut self, to: CreationStage) {
        if self.stage < to {
            self.stage = to;
        }
    }

    /// Dialog to show after completing a step that would normally lead to
    /// `next`: once the review screen has been reached, every completed
    /// dialog returns to it.
    fn forward(&self, next: Dialog) -> Dialog {
        if self.stage == CreationStage::ReviewNext {
            Dialog::Review
        } else {
            next
        }
    }

    /// Feed one dialog input; returns the dialog to show next.
    pub fn handle(&mut self, event: ChargenEvent) -> Dialog {
        match event {
            ChargenEvent::Start => Dialog::Name,
            ChargenEvent::NameEntered(name) => {
                self.name = name;
                self.advance(CreationStage::NameChosen);
                self.forward(Dialog::Race)
            }
            ChargenEvent::RaceDone(race) => {
                self.race = race;
                self.advance(CreationStage::RaceChosen);
                self.forward(Dialog::ClassChoice)
            }
            ChargenEvent::RaceBack => Dialog::Name,
            ChargenEvent::ClassChoice(path) => match path {
                ClassPath::GenerateClass => {
                    self.question = 0;
                    self.specializations = [0; 3];
                    Dialog::GenerateClassQuestion(0)
                }
                ClassPath::PickClass => Dialog::PickClass,
                ClassPath::CreateClass => Dialog::CreateClass,
                ClassPath::Back => Dialog::Race,
            },
            ChargenEvent::PickClassDone(class) | ChargenEvent::CreateClassDone(class) => {
                self.class_name = class;
                self.advance(CreationStage::ClassChosen);
                self.forward(Dialog::BirthSign)
            }
            ChargenEvent::PickClassBack | ChargenEvent::CreateClassBack => Dialog::ClassChoice,
            ChargenEvent::QuestionAnswered(specialization) => {
                let index = match specialization {
                    Specialization::Combat => 0,
                    Specialization::Magic => 1,
                    Specialization::Stealth => 2,
                };
                self.specializations[index] += 1;
                self.question += 1;
                if self.question < GENERATE_QUESTIONS {
                    Dialog::GenerateClassQuestion(self.question)
                } else {
                    Dialog::GenerateClassResult
                }
            }
            ChargenEvent::GenerateBack => Dialog::ClassChoice,
            ChargenEvent::GenerateDone(accepted) => {
                if accepted {
                    self.class_name = match self.generated_class() {
                        Specialization::Combat => "Warrior".to_string(),
                        Specialization::Magic => "Mage".to_string(),
                        Specialization::Stealth => "Thief".to_string(),
                    };
                    self.advance(CreationStage::ClassChosen);
                    self.forward(Dialog::BirthSign)
                } else {
                    Dialog::ClassChoice
                }
            }
            ChargenEvent::BirthSignDone(sign) => {
                self.birth_sign = sign;
                self.advance(CreationStage::BirthSignChosen);
                Dialog::Review
            }
            ChargenEvent::BirthSignBack => Dialog::ClassChoice,
            ChargenEvent::ReviewDone => {
                self.advance(CreationStage::ReviewNext);
                self.sheet = Some(CharacterSheet {
                    name: self.name.clone(),
                    race: self.race.clone(),
                    class_name: self.class_name.clone(),
                    birth_sign: self.birth_sign.clone(),
                });
                Dialog::None
            }
            ChargenEvent::ReviewBack => Dialog::BirthSign,
            ChargenEvent::ReviewActivate(target) => {
                // Re-opening a dialog from review pins the stage so the
                // re-done dialog returns straight back to review.
                self.advance(CreationStage::ReviewNext);
                match target {
                    ReviewTarget::Name => Dialog::Name,
                    ReviewTarget::Race => Dialog::Race,
                    ReviewTarget::Class => Dialog::ClassChoice,
                    ReviewTarget::BirthSign => Dialog::BirthSign,
                }
            }
        }
    }
}

impl Default for CharGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_to_review(gen: &mut CharGen) {
        assert_eq!(gen.handle(ChargenEvent::Start), Dialog::Name);
        assert_eq!(
            gen.handle(ChargenEvent::NameEntered("Ayla".into())),
            Dialog::Race
        );
        assert_eq!(
            gen.handle(ChargenEvent::RaceDone("nord".into())),
            Dialog::ClassChoice
        );
        assert_eq!(
            gen.handle(ChargenEvent::ClassChoice(ClassPath::PickClass)),
            Dialog::PickClass
        );
        assert_eq!(
            gen.handle(ChargenEvent::PickClassDone("Knight".into())),
            Dialog::BirthSign
        );
        assert_eq!(
            gen.handle(ChargenEvent::BirthSignDone("warrior".into())),
            Dialog::Review
        );
    }

    #[test]
    fn full_pick_class_walkthrough() {
        let mut gen = CharGen::new();
        walk_to_review(&mut gen);
        assert_eq!(gen.stage(), CreationStage::BirthSignChosen);

        assert_eq!(gen.handle(ChargenEvent::ReviewDone), Dialog::None);
        let sheet = gen.sheet().expect("sheet after review");
        assert_eq!(sheet.name, "Ayla");
        assert_eq!(sheet.race, "nord");
        assert_eq!(sheet.class_name, "Knight");
        assert_eq!(sheet.birth_sign, "warrior");
    }

    #[test]
    fn stage_is_monotone() {
        let mut gen = CharGen::new();
        walk_to_review(&mut gen);

        // Going back and redoing an earlier dialog must not regress the stage.
        assert_eq!(gen.handle(ChargenEvent::ReviewBack), Dialog::BirthSign);
        assert_eq!(gen.handle(ChargenEvent::BirthSignBack), Dialog::ClassChoice);
        assert_eq!(gen.stage(), CreationStage::BirthSignChosen);
    }

    #[test]
    fn review_activate_jumps_back_to_review() {
        let mut gen = CharGen::new();
        walk_to_review(&mut gen);

        assert_eq!(
            gen.handle(ChargenEvent::ReviewActivate(ReviewTarget::Name)),
            Dialog::Name
        );
        // Finishing the re-opened dialog returns to review, not to Race.
        assert_eq!(
            gen.handle(ChargenEvent::NameEntered("Brand".into())),
            Dialog::Review
        );
        assert_eq!(gen.name(), "Brand");
    }

    #[test]
    fn generated_class_counts_answers() {
        let mut gen = CharGen::new();
        gen.handle(ChargenEvent::Start);
        gen.handle(ChargenEvent::NameEntered("Ayla".into()));
        gen.handle(ChargenEvent::RaceDone("nord".into()));
        assert_eq!(
            gen.handle(ChargenEvent::ClassChoice(ClassPath::GenerateClass)),
            Dialog::GenerateClassQuestion(0)
        );

        // Six stealth answers, four combat.
        for i in 0..GENERATE_QUESTIONS {
            let answer = if i < 6 {
                Specialization::Stealth
            } else {
                Specialization::Combat
            };
            let dialog = gen.handle(ChargenEvent::QuestionAnswered(answer));
            if i + 1 < GENERATE_QUESTIONS {
                assert_eq!(dialog, Dialog::GenerateClassQuestion(i + 1));
            } else {
                assert_eq!(dialog, Dialog::GenerateClassResult);
            }
        }

        assert_eq!(gen.generated_class(), Specialization::Stealth);
        assert_eq!(gen.handle(ChargenEvent::GenerateDone(true)), Dialog::BirthSign);
        assert_eq!(gen.class_name(), "Thief");
    }

    #[test]
    fn generated_class_tie_prefers_combat() {
        let mut gen = CharGen::new();
        assert_eq!(gen.generated_class(), Specialization::Combat);
    }

    #[test]
    fn rejecting_generated_class_returns_to_choice() {
        let mut gen = CharGen::new();
        gen.handle(ChargenEvent::ClassChoice(ClassPath::GenerateClass));
        for _ in 0..GENERATE_QUESTIONS {
            gen.handle(ChargenEvent::QuestionAnswered(Specialization::Magic));
        }
        assert_eq!(gen.handle(ChargenEvent::GenerateDone(false)), Dialog::ClassChoice);
        assert_eq!(gen.class_name(), "");

        // Restarting the questions resets the counters.
        gen.handle(ChargenEvent::ClassChoice(ClassPath::GenerateClass));
        assert_eq!(gen.generated_class(), Specialization::Combat);
    }

    #[test]
    fn back_walks_to_previous_dialog() {
        let mut gen = CharGen::new();
        gen.handle(ChargenEvent::Start);
        gen.handle(ChargenEvent::NameEntered("Ayla".into()));
        assert_eq!(gen.handle(ChargenEvent::RaceBack), Dialog::Name);
        assert_eq!(
            gen.handle(ChargenEvent::ClassChoice(ClassPath::Back)),
            Dialog::Race
        );
        assert_eq!(gen.handle(ChargenEvent::PickClassBack), Dialog::ClassChoice);
    }
}
