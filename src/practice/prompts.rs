//! Tutor instructions and opening messages for a lesson

use super::analysis::{CORRECTION_MARKER, SUCCESS_MARKER};
use super::models::DifficultyTier;
use super::tutor::TutorPrompt;

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Ask the student a question related to the topic",
    "Have a friendly conversation about daily life",
];

/// Conversation starters for the built-in lesson topics
fn topic_suggestions(topic: &str) -> &'static [&'static str] {
    match topic {
        "Greetings" => &[
            "Ask them to introduce themselves",
            "Ask how they are doing today",
            "Ask where they are from",
        ],
        "Food" => &[
            "Ask about their favorite food",
            "Ask what they ate for breakfast",
            "Ask them to describe a typical meal in their country",
        ],
        "Clothing" => &[
            "Ask what they are wearing today",
            "Ask about their favorite piece of clothing",
            "Ask what they wear in different seasons",
        ],
        "Family" => &[
            "Ask about their family members",
            "Ask them to describe a family member",
            "Ask about family traditions",
        ],
        "Sports" => &[
            "Ask about their favorite sport",
            "Ask them to write about their favorite soccer player and why they like them",
            "Ask if they play any sports",
        ],
        "Travel" => &[
            "Ask about a place they want to visit",
            "Ask about their last vacation",
            "Ask them to describe their hometown",
        ],
        _ => FALLBACK_SUGGESTIONS,
    }
}

fn greeting(tier: DifficultyTier, topic: &str) -> Option<&'static str> {
    let text = match (tier, topic) {
        (DifficultyTier::Beginner, "Greetings") => "¡Hola! Bienvenido a la lección de saludos. I'm your Spanish tutor! Let's practice greetings. ¿Cómo te llamas? (What is your name?)",
        (DifficultyTier::Beginner, "Food") => "¡Hola! Welcome to the food lesson! Let's talk about comida. ¿Cuál es tu comida favorita? (What is your favorite food?)",
        (DifficultyTier::Beginner, "Clothing") => "¡Hola! Today we're learning about la ropa (clothing). ¿Qué llevas puesto hoy? (What are you wearing today?)",
        (DifficultyTier::Beginner, "Family") => "¡Hola! Let's talk about la familia. ¿Cuántas personas hay en tu familia? (How many people are in your family?)",
        (DifficultyTier::Beginner, "Sports") => "¡Hola! Today's topic is deportes (sports). ¿Te gustan los deportes? (Do you like sports?)",
        (DifficultyTier::Beginner, "Travel") => "¡Hola! Let's discuss los viajes (travel). ¿A dónde te gustaría viajar? (Where would you like to travel?)",

        (DifficultyTier::Intermediate, "Greetings") => "¡Hola! ¿Cómo estás hoy? Espero que estés bien. Cuéntame un poco sobre ti - ¿de dónde eres y qué te gusta hacer?",
        (DifficultyTier::Intermediate, "Food") => "¡Hola! Hoy vamos a hablar sobre la comida. ¿Qué comiste ayer para la cena? Cuéntame sobre tu plato favorito.",
        (DifficultyTier::Intermediate, "Clothing") => "¡Hola! ¿Cómo te vistes hoy? Describe lo que llevas puesto y cuál es tu estilo favorito.",
        (DifficultyTier::Intermediate, "Family") => "¡Hola! Vamos a hablar sobre la familia. ¿Podrías describir a un miembro de tu familia? ¿Cómo es?",
        (DifficultyTier::Intermediate, "Sports") => "¡Hola! Hablemos de deportes. ¿Practicas algún deporte? ¿Cuándo empezaste y por qué te gusta?",
        (DifficultyTier::Intermediate, "Travel") => "¡Hola! El tema de hoy es viajar. ¿Has viajado recientemente? Cuéntame sobre un lugar interesante que visitaste.",

        (DifficultyTier::Advanced, "Greetings") => "¡Buenas! ¿Qué tal te va? Me encantaría conocerte mejor. Cuéntame sobre tu vida cotidiana, tus pasatiempos y tus metas para aprender español.",
        (DifficultyTier::Advanced, "Food") => "¡Hola! Hoy profundizaremos en el tema de la gastronomía. ¿Qué opinas de la cocina española o latinoamericana? ¿Has probado algún plato típico que te haya sorprendido?",
        (DifficultyTier::Advanced, "Clothing") => "¡Hola! Vamos a explorar el mundo de la moda. ¿Cómo describirías tu estilo personal? ¿Crees que la ropa refleja la personalidad de una persona?",
        (DifficultyTier::Advanced, "Family") => "¡Hola! Hoy conversaremos sobre las relaciones familiares. ¿Cómo son las tradiciones familiares en tu cultura? ¿Qué valores te han transmitido tus familiares?",
        (DifficultyTier::Advanced, "Sports") => "¡Hola! Charlemos sobre el deporte a un nivel más profundo. ¿Qué papel juega el deporte en tu vida? ¿Crees que los deportes profesionales tienen demasiada influencia en la sociedad?",
        (DifficultyTier::Advanced, "Travel") => "¡Hola! Exploremos el fascinante mundo de los viajes. ¿Qué experiencia de viaje te ha cambiado la perspectiva? ¿Prefieres el turismo de aventura o el cultural?",

        _ => return None,
    };
    Some(text)
}

impl TutorPrompt {
    /// Instructions sent to the tutor ahead of the conversation
    pub fn system_prompt(&self) -> String {
        let level = self.tier.guidelines();
        let suggestions = topic_suggestions(&self.topic).join(", ");

        format!(
            "You are a friendly Spanish tutor helping a student practice conversational Spanish.
The current lesson category is: {topic}
Vocabulary words for this lesson include: {vocabulary}
Verbs for this lesson include: {verbs}

STUDENT DIFFICULTY LEVEL: {level_name}
- Use approximately {ratio} Spanish in your responses
- Use {complexity}
- Vocabulary scope: {scope}
- Grammar focus: {grammar}
- When correcting mistakes: {correction}
- Response length: {length}

Guidelines:
1. Open with a Spanish greeting and a question that suits the student's level
2. Encourage the student to answer in Spanish
3. Correct mistakes gently, in the way described for their level
4. Work the lesson vocabulary and verbs into the conversation where you can
5. Keep replies conversational and encouraging
6. Match the complexity of your Spanish to the student's level
7. Suggested conversation topics: {suggestions}

IMPORTANT: When the student makes a grammar or vocabulary error, begin your correction with \"{correction_marker}\" so their progress can be tracked.
When the student answers correctly in good Spanish, include \"{success_marker}\" to acknowledge it.

Be patient, supportive, and make learning fun!",
            topic = self.topic,
            vocabulary = self.vocabulary_list(),
            verbs = self.verb_list(),
            level_name = level.level_name,
            ratio = level.target_language_ratio,
            complexity = level.sentence_complexity,
            scope = level.vocabulary_scope,
            grammar = level.grammar_focus,
            correction = level.correction_style,
            length = level.response_length,
            suggestions = suggestions,
            correction_marker = CORRECTION_MARKER,
            success_marker = SUCCESS_MARKER,
        )
    }

    /// Opening tutor message of a session, prefixed with the learner's level
    pub fn initial_greeting(&self) -> String {
        let greeting = match greeting(self.tier, &self.topic) {
            Some(text) => text.to_string(),
            None => format!(
                "¡Hola! Welcome to the {} lesson. Let's practice Spanish together!",
                self.topic
            ),
        };
        format!("{}{}", self.level_indicator(), greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::tutor::VocabularyHint;

    fn food_lesson(tier: DifficultyTier) -> TutorPrompt {
        let mut prompt = TutorPrompt::new("Food", tier);
        prompt.vocabulary = vec![
            VocabularyHint {
                word: "la manzana".to_string(),
                translation: "apple".to_string(),
            },
            VocabularyHint {
                word: "el pan".to_string(),
                translation: "bread".to_string(),
            },
        ];
        prompt.verbs = vec!["comer".to_string(), "beber".to_string()];
        prompt
    }

    #[test]
    fn test_system_prompt_carries_lesson_and_level() {
        let prompt = food_lesson(DifficultyTier::Intermediate).system_prompt();

        assert!(prompt.contains("The current lesson category is: Food"));
        assert!(prompt.contains("la manzana (apple), el pan (bread)"));
        assert!(prompt.contains("Verbs for this lesson include: comer, beber"));
        assert!(prompt.contains("STUDENT DIFFICULTY LEVEL: Intermediate"));
        assert!(prompt.contains("approximately 60% Spanish"));
        assert!(prompt.contains("Ask what they ate for breakfast"));
    }

    #[test]
    fn test_system_prompt_explains_markers() {
        let prompt = food_lesson(DifficultyTier::Beginner).system_prompt();
        assert!(prompt.contains(&format!("\"{}\"", CORRECTION_MARKER)));
        assert!(prompt.contains(&format!("\"{}\"", SUCCESS_MARKER)));
        assert!(prompt.contains("always translate and explain in English"));
    }

    #[test]
    fn test_system_prompt_unknown_topic_uses_generic_suggestions() {
        let prompt = TutorPrompt::new("Weather", DifficultyTier::Advanced).system_prompt();
        assert!(prompt.contains("Ask the student a question related to the topic"));
        assert!(prompt.contains("STUDENT DIFFICULTY LEVEL: Advanced"));
    }

    #[test]
    fn test_initial_greeting_per_tier() {
        let beginner = food_lesson(DifficultyTier::Beginner).initial_greeting();
        assert!(beginner.starts_with("[Your level: Beginner] ¡Hola! Welcome to the food lesson!"));

        let advanced = TutorPrompt::new("Travel", DifficultyTier::Advanced).initial_greeting();
        assert!(advanced.starts_with("[Your level: Advanced] ¡Hola! Exploremos"));

        for tier in [
            DifficultyTier::Beginner,
            DifficultyTier::Intermediate,
            DifficultyTier::Advanced,
        ] {
            for topic in ["Greetings", "Food", "Clothing", "Family", "Sports", "Travel"] {
                assert!(greeting(tier, topic).is_some(), "{} {}", tier, topic);
            }
        }
    }

    #[test]
    fn test_initial_greeting_unknown_topic() {
        let prompt = TutorPrompt::new("Weather", DifficultyTier::Intermediate);
        assert_eq!(
            prompt.initial_greeting(),
            "[Your level: Intermediate] ¡Hola! Welcome to the Weather lesson. Let's practice Spanish together!"
        );
    }
}
