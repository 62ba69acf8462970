// src/quiz/bank.rs
//
// Static question bank ported from the product's question data. Order is
// stable and significant: clients render questions in this sequence.

use std::sync::LazyLock;

use crate::models::question::{CareerField, QuestionKind, QuestionOption, QuizQuestion};
use crate::quiz::QuizError;

/// Category identifiers and their display names.
pub const CATEGORIES: [(&str, &str); 10] = [
    ("problem-solving", "Problem Solving"),
    ("empathy", "Empathy & Care"),
    ("leadership", "Leadership"),
    ("innovation", "Innovation & Creativity"),
    ("analysis", "Analysis & Research"),
    ("communication", "Communication"),
    ("hands-on", "Hands-on Work"),
    ("detail-oriented", "Attention to Detail"),
    ("teamwork", "Teamwork"),
    ("independence", "Independent Work"),
];

/// Builds a bank entry. All shipped options carry weightage 1; the field
/// stays in the data model for future weighted banks.
fn q(
    id: i64,
    field: CareerField,
    category: &str,
    kind: QuestionKind,
    question_text: &str,
    options: &[(&str, i64)],
) -> QuizQuestion {
    QuizQuestion {
        id,
        field,
        category: category.to_string(),
        question_text: question_text.to_string(),
        kind,
        options: options
            .iter()
            .map(|(text, score)| QuestionOption {
                text: text.to_string(),
                score: *score,
                weightage: 1,
            })
            .collect(),
    }
}

static QUESTION_BANK: LazyLock<Vec<QuizQuestion>> = LazyLock::new(|| {
    use CareerField::*;

    vec![
        q(1, Engineering, "problem-solving", QuestionKind::Mcq,
          "How do you prefer to approach complex technical problems?", &[
            ("Break them down into smaller, manageable components", 5),
            ("Research existing solutions and adapt them", 4),
            ("Experiment with different approaches until something works", 3),
            ("Seek input from colleagues before proceeding", 2),
        ]),
        q(2, Engineering, "innovation", QuestionKind::Mcq,
          "When designing a new system, what excites you most?", &[
            ("Creating something that's never been built before", 5),
            ("Optimizing existing systems for better performance", 4),
            ("Ensuring the system is reliable and maintainable", 3),
            ("Making sure it meets all user requirements", 2),
        ]),
        q(3, Engineering, "detail-oriented", QuestionKind::Rating,
          "How important is precision in your work?", &[
            ("Extremely important - even small errors can have major consequences", 5),
            ("Very important - I always double-check my work", 4),
            ("Important - I'm careful but don't obsess over minor details", 3),
            ("Somewhat important - I focus on the big picture", 2),
            ("Not very important - I prefer to move fast and iterate", 1),
        ]),
        q(4, Engineering, "hands-on", QuestionKind::Rating,
          "Do you enjoy working with your hands and building physical things?", &[
            ("Love it - I prefer tangible, hands-on work", 5),
            ("Enjoy it - I like a mix of hands-on and theoretical work", 4),
            ("It's okay - I can do it when needed", 3),
            ("Not really - I prefer working with concepts and ideas", 2),
            ("Dislike it - I much prefer theoretical or digital work", 1),
        ]),
        q(5, Engineering, "teamwork", QuestionKind::Mcq,
          "In a software development team, what role do you naturally take?", &[
            ("Technical lead who guides architecture decisions", 5),
            ("Senior developer who mentors others", 4),
            ("Specialist who focuses on specific technical areas", 3),
            ("Collaborative developer who works well with everyone", 2),
        ]),
        q(6, Medical, "empathy", QuestionKind::Mcq,
          "When someone is in distress, your first instinct is to:", &[
            ("Listen carefully and offer emotional support", 5),
            ("Try to understand the root cause of their distress", 4),
            ("Give them space to process their feelings", 3),
            ("Share a similar experience you've had", 2),
        ]),
        q(7, Medical, "detail-oriented", QuestionKind::Rating,
          "How do you feel about following strict protocols and procedures?", &[
            ("Essential - protocols exist for good reasons and should be followed", 5),
            ("Important - I follow them but adapt when necessary", 4),
            ("Useful - they provide good guidance most of the time", 3),
            ("Limiting - I prefer more flexibility in my approach", 2),
            ("Restrictive - I work better with creative freedom", 1),
        ]),
        q(8, Medical, "problem-solving", QuestionKind::Mcq,
          "When faced with a complex health issue, how do you approach it?", &[
            ("Systematically gather all available information first", 5),
            ("Look for patterns based on similar cases", 4),
            ("Consider multiple possibilities simultaneously", 3),
            ("Focus on the most obvious symptoms first", 2),
        ]),
        q(9, Medical, "communication", QuestionKind::Rating,
          "How comfortable are you explaining complex information to others?", &[
            ("Very comfortable - I enjoy teaching and explaining", 5),
            ("Comfortable - I can adapt my communication to the audience", 4),
            ("Somewhat comfortable - I can do it when needed", 3),
            ("Uncomfortable - I prefer written communication", 2),
            ("Very uncomfortable - I avoid explaining complex topics", 1),
        ]),
        q(10, Medical, "empathy", QuestionKind::Mcq,
          "How do you handle emotionally difficult situations?", &[
            ("I stay calm and provide steady support", 5),
            ("I feel deeply but maintain professional composure", 4),
            ("I focus on practical solutions to help", 3),
            ("I find it challenging but push through", 2),
        ]),
        q(11, Business, "leadership", QuestionKind::Mcq,
          "In a team project, you naturally tend to:", &[
            ("Take charge and delegate tasks effectively", 5),
            ("Coordinate between team members and facilitate", 4),
            ("Contribute ideas and support the leader", 3),
            ("Focus on your specific area of expertise", 2),
        ]),
        q(12, Business, "communication", QuestionKind::Mcq,
          "How do you prefer to present ideas to stakeholders?", &[
            ("Detailed presentations with data and analysis", 5),
            ("Clear, concise summaries with key points", 4),
            ("Interactive discussions and brainstorming", 3),
            ("Visual demonstrations or prototypes", 2),
        ]),
        q(13, Business, "problem-solving", QuestionKind::Mcq,
          "When facing a business challenge, what's your first step?", &[
            ("Analyze data and market trends", 5),
            ("Consult with team members and stakeholders", 4),
            ("Research how others have solved similar problems", 3),
            ("Brainstorm creative solutions", 2),
        ]),
        q(14, Business, "leadership", QuestionKind::Rating,
          "How do you motivate team members?", &[
            ("By setting clear goals and recognizing achievements", 5),
            ("By providing support and removing obstacles", 4),
            ("By leading by example and working alongside them", 3),
            ("By giving them autonomy and trusting their judgment", 2),
            ("I'm not comfortable in motivational roles", 1),
        ]),
        q(15, Business, "analysis", QuestionKind::Rating,
          "How important is data in your decision-making process?", &[
            ("Critical - I always need data to support decisions", 5),
            ("Very important - data guides most of my decisions", 4),
            ("Important - I use data but also trust intuition", 3),
            ("Somewhat important - I prefer qualitative insights", 2),
            ("Not very important - I rely more on experience and intuition", 1),
        ]),
        q(16, Creative, "innovation", QuestionKind::Mcq,
          "When starting a creative project, you prefer to:", &[
            ("Experiment with unconventional approaches", 5),
            ("Combine existing ideas in new ways", 4),
            ("Build upon proven techniques", 3),
            ("Follow established methodologies", 2),
        ]),
        q(17, Creative, "independence", QuestionKind::Rating,
          "Do you work better alone or with others on creative projects?", &[
            ("Much better alone - I need solitude to be creative", 5),
            ("Better alone - but I enjoy occasional collaboration", 4),
            ("Both equally - depends on the project", 3),
            ("Better with others - collaboration sparks creativity", 2),
            ("Much better with others - I thrive on group energy", 1),
        ]),
        q(18, Creative, "innovation", QuestionKind::Mcq,
          "How do you handle creative blocks?", &[
            ("Take a break and let ideas come naturally", 5),
            ("Try different techniques or mediums", 4),
            ("Look for inspiration from other creators", 3),
            ("Push through and keep working", 2),
        ]),
        q(19, Creative, "communication", QuestionKind::Rating,
          "How important is it that others understand your creative work?", &[
            ("Very important - art should communicate and connect", 5),
            ("Important - but I also value personal expression", 4),
            ("Somewhat important - I create primarily for myself", 3),
            ("Not very important - art is subjective", 2),
            ("Not important - I create purely for personal satisfaction", 1),
        ]),
        q(20, Creative, "detail-oriented", QuestionKind::Mcq,
          "How do you approach the technical aspects of your creative work?", &[
            ("Master the technical skills to serve the creative vision", 5),
            ("Learn enough technique to express ideas effectively", 4),
            ("Focus on creativity and learn technique as needed", 3),
            ("Prefer to collaborate with technical experts", 2),
        ]),
        q(21, Science, "analysis", QuestionKind::Rating,
          "How important is it to understand the \"why\" behind processes?", &[
            ("Extremely important - I need to understand everything deeply", 5),
            ("Very important - understanding helps me work better", 4),
            ("Important - it's nice to know but not essential", 3),
            ("Somewhat important - results matter more than process", 2),
            ("Not important - I prefer practical application", 1),
        ]),
        q(22, Science, "detail-oriented", QuestionKind::Rating,
          "How do you feel about conducting repetitive experiments?", &[
            ("I enjoy it - repetition ensures reliable results", 5),
            ("I accept it - it's necessary for good science", 4),
            ("I tolerate it - but prefer varied work", 3),
            ("I dislike it - I prefer exploring new ideas", 2),
            ("I avoid it - repetitive work drains my energy", 1),
        ]),
        q(23, Science, "problem-solving", QuestionKind::Mcq,
          "When your hypothesis is proven wrong, how do you react?", &[
            ("Excited - it means I've learned something new", 5),
            ("Curious - I want to understand why it was wrong", 4),
            ("Disappointed but motivated to try again", 3),
            ("Frustrated but I push through", 2),
        ]),
        q(24, Science, "independence", QuestionKind::Rating,
          "Do you prefer working on long-term research projects?", &[
            ("Love it - I enjoy deep, sustained investigation", 5),
            ("Enjoy it - I like seeing projects through to completion", 4),
            ("It's okay - I can handle long projects when needed", 3),
            ("Prefer shorter projects - I like variety", 2),
            ("Dislike it - I need frequent changes and quick results", 1),
        ]),
        q(25, Science, "communication", QuestionKind::Rating,
          "How comfortable are you presenting research findings?", &[
            ("Very comfortable - I enjoy sharing discoveries", 5),
            ("Comfortable - I can present effectively when needed", 4),
            ("Somewhat comfortable - I prefer written reports", 3),
            ("Uncomfortable - I'd rather focus on the research", 2),
            ("Very uncomfortable - I avoid presentations", 1),
        ]),
        q(26, Education, "communication", QuestionKind::Rating,
          "How do you feel about explaining complex concepts to beginners?", &[
            ("I love it - breaking down complexity is rewarding", 5),
            ("I enjoy it - it helps me understand better too", 4),
            ("I can do it - but it requires effort", 3),
            ("I find it challenging - I prefer working with experts", 2),
            ("I avoid it - I'm not good at simplifying", 1),
        ]),
        q(27, Education, "empathy", QuestionKind::Mcq,
          "When someone is struggling to learn, what's your approach?", &[
            ("Find different ways to explain until they understand", 5),
            ("Provide additional resources and support", 4),
            ("Encourage them and build their confidence", 3),
            ("Give them time and space to figure it out", 2),
        ]),
        q(28, Education, "leadership", QuestionKind::Mcq,
          "How do you handle disruptive behavior in a group setting?", &[
            ("Address it directly but respectfully", 5),
            ("Redirect the energy toward productive activities", 4),
            ("Speak with the person privately later", 3),
            ("Ignore it and hope it resolves itself", 2),
        ]),
        q(29, Education, "innovation", QuestionKind::Mcq,
          "How do you keep your teaching or training methods fresh?", &[
            ("Constantly experiment with new approaches", 5),
            ("Regularly update content and methods", 4),
            ("Adapt based on learner feedback", 3),
            ("Stick with proven methods that work", 2),
        ]),
        q(30, Education, "teamwork", QuestionKind::Rating,
          "How do you prefer to work with other educators?", &[
            ("Love collaboration - we achieve more together", 5),
            ("Enjoy collaboration - sharing ideas improves outcomes", 4),
            ("Collaborate when needed - but value independence", 3),
            ("Prefer working alone - but can collaborate", 2),
            ("Much prefer working independently", 1),
        ]),
        q(31, Legal, "analysis", QuestionKind::Mcq,
          "How do you approach analyzing complex legal or policy documents?", &[
            ("Systematically break down each section and clause", 5),
            ("Focus on key provisions and their implications", 4),
            ("Look for precedents and similar cases", 3),
            ("Identify the main objectives and work backwards", 2),
        ]),
        q(32, Legal, "communication", QuestionKind::Rating,
          "How comfortable are you with public speaking and argumentation?", &[
            ("Very comfortable - I enjoy debate and persuasion", 5),
            ("Comfortable - I can argue effectively when needed", 4),
            ("Somewhat comfortable - I prefer written arguments", 3),
            ("Uncomfortable - I avoid confrontational situations", 2),
            ("Very uncomfortable - I prefer behind-the-scenes work", 1),
        ]),
        q(33, Legal, "detail-oriented", QuestionKind::Rating,
          "How important is attention to detail in your work?", &[
            ("Critical - small details can have huge consequences", 5),
            ("Very important - I'm naturally detail-oriented", 4),
            ("Important - I'm careful but focus on big picture too", 3),
            ("Somewhat important - I prefer strategic thinking", 2),
            ("Not very important - I'm more of a big picture person", 1),
        ]),
        q(34, Legal, "empathy", QuestionKind::Mcq,
          "How do you balance justice with compassion?", &[
            ("Both are essential - justice should be compassionate", 5),
            ("Justice first, but with understanding of human impact", 4),
            ("Follow the law but consider individual circumstances", 3),
            ("The law is the law - emotions shouldn't interfere", 2),
        ]),
        q(35, Legal, "problem-solving", QuestionKind::Mcq,
          "When facing a legal challenge, what's your first approach?", &[
            ("Research precedents and case law thoroughly", 5),
            ("Analyze the facts and identify key legal issues", 4),
            ("Consider multiple legal strategies", 3),
            ("Consult with colleagues and experts", 2),
        ]),
        q(36, Agriculture, "hands-on", QuestionKind::Rating,
          "How do you feel about working outdoors in various weather conditions?", &[
            ("Love it - I prefer outdoor work to office environments", 5),
            ("Enjoy it - I like the variety and connection to nature", 4),
            ("It's okay - I can handle it when necessary", 3),
            ("Tolerate it - but prefer indoor work", 2),
            ("Dislike it - I much prefer climate-controlled environments", 1),
        ]),
        q(37, Agriculture, "problem-solving", QuestionKind::Mcq,
          "How do you approach solving environmental challenges?", &[
            ("Look for sustainable, long-term solutions", 5),
            ("Balance environmental and economic factors", 4),
            ("Focus on practical, implementable solutions", 3),
            ("Research what others have done successfully", 2),
        ]),
        q(38, Agriculture, "independence", QuestionKind::Rating,
          "Do you prefer working independently or as part of a team?", &[
            ("Much prefer independent work - I'm self-motivated", 5),
            ("Prefer independence but enjoy occasional collaboration", 4),
            ("Both equally - depends on the task", 3),
            ("Prefer teamwork - I like shared responsibility", 2),
            ("Much prefer teamwork - I thrive on group energy", 1),
        ]),
        q(39, Agriculture, "detail-oriented", QuestionKind::Rating,
          "How important is monitoring and record-keeping in your work?", &[
            ("Essential - detailed records are crucial for success", 5),
            ("Very important - I maintain thorough documentation", 4),
            ("Important - I keep necessary records", 3),
            ("Somewhat important - I focus more on action", 2),
            ("Not very important - I prefer hands-on work", 1),
        ]),
        q(40, Agriculture, "innovation", QuestionKind::Mcq,
          "How do you feel about adopting new agricultural technologies?", &[
            ("Excited - I love exploring new tools and methods", 5),
            ("Open - I'll try new technologies if they prove beneficial", 4),
            ("Cautious - I prefer proven methods but will adapt", 3),
            ("Skeptical - traditional methods work fine", 2),
        ]),
        q(41, General, "independence", QuestionKind::Mcq,
          "What type of work schedule appeals to you most?", &[
            ("Flexible schedule that I can control", 5),
            ("Standard business hours with some flexibility", 4),
            ("Structured schedule with clear expectations", 3),
            ("Variable schedule based on project needs", 2),
        ]),
        q(42, General, "teamwork", QuestionKind::Mcq,
          "In meetings, you typically:", &[
            ("Lead discussions and guide decisions", 5),
            ("Contribute ideas and facilitate collaboration", 4),
            ("Listen carefully and provide thoughtful input", 3),
            ("Prefer to observe and contribute when asked", 2),
        ]),
        q(43, General, "problem-solving", QuestionKind::Mcq,
          "When learning new skills, you prefer to:", &[
            ("Dive in and learn by doing", 5),
            ("Take structured courses or training", 4),
            ("Learn from mentors or colleagues", 3),
            ("Study theory first, then practice", 2),
        ]),
        q(44, General, "communication", QuestionKind::Mcq,
          "How do you prefer to receive feedback?", &[
            ("Direct, honest feedback with specific examples", 5),
            ("Constructive feedback with suggestions for improvement", 4),
            ("Gentle feedback that focuses on positives", 3),
            ("Written feedback that I can review privately", 2),
        ]),
        q(45, General, "innovation", QuestionKind::Mcq,
          "How do you stay current with trends in your field?", &[
            ("Actively research and experiment with new developments", 5),
            ("Follow industry publications and attend conferences", 4),
            ("Learn from colleagues and professional networks", 3),
            ("Focus on mastering current skills rather than chasing trends", 2),
        ]),
        q(46, Engineering, "problem-solving", QuestionKind::Scenario,
          "You're leading a project that's behind schedule. What's your priority?", &[
            ("Analyze what went wrong and adjust the plan", 5),
            ("Increase resources to meet the deadline", 4),
            ("Negotiate a new timeline with stakeholders", 3),
            ("Focus the team on the most critical features", 2),
        ]),
        q(47, Medical, "empathy", QuestionKind::Scenario,
          "A patient is anxious about a procedure. How do you respond?", &[
            ("Take time to explain the procedure and answer questions", 5),
            ("Provide reassurance and emotional support", 4),
            ("Share information about success rates and outcomes", 3),
            ("Refer them to additional resources or support staff", 2),
        ]),
        q(48, Business, "leadership", QuestionKind::Scenario,
          "Your team disagrees on a major decision. How do you proceed?", &[
            ("Facilitate discussion to reach consensus", 5),
            ("Gather more data to inform the decision", 4),
            ("Make the decision based on your expertise", 3),
            ("Escalate to higher management for guidance", 2),
        ]),
        q(49, Creative, "innovation", QuestionKind::Scenario,
          "A client rejects your creative concept. What's your response?", &[
            ("Ask for specific feedback and iterate on the concept", 5),
            ("Present alternative concepts that address their concerns", 4),
            ("Explain the reasoning behind your original concept", 3),
            ("Start over with a completely different approach", 2),
        ]),
        q(50, Science, "analysis", QuestionKind::Scenario,
          "Your research results contradict published literature. What do you do?", &[
            ("Carefully review methodology and repeat experiments", 5),
            ("Consult with colleagues and seek peer review", 4),
            ("Research possible explanations for the discrepancy", 3),
            ("Assume there was an error and adjust results", 2),
        ]),
        q(51, Education, "communication", QuestionKind::Scenario,
          "A student consistently arrives late to class. How do you handle it?", &[
            ("Speak with them privately to understand the situation", 5),
            ("Set clear expectations and consequences for the class", 4),
            ("Ignore it unless it disrupts others", 3),
            ("Address it publicly as a teaching moment", 2),
        ]),
        q(52, Legal, "analysis", QuestionKind::Scenario,
          "You discover evidence that weakens your client's case. What do you do?", &[
            ("Discuss it honestly with your client and adjust strategy", 5),
            ("Research ways to address or minimize the impact", 4),
            ("Continue with the original strategy", 3),
            ("Seek guidance from senior colleagues", 2),
        ]),
        q(53, Agriculture, "problem-solving", QuestionKind::Scenario,
          "Crop yields are declining despite following standard practices. Your approach?", &[
            ("Analyze soil conditions and environmental factors", 5),
            ("Consult with agricultural extension services", 4),
            ("Try different seed varieties or techniques", 3),
            ("Research what neighboring farms are doing", 2),
        ]),
        q(54, General, "leadership", QuestionKind::Mcq,
          "What motivates you most in your work?", &[
            ("Making a positive impact on others", 5),
            ("Solving challenging problems", 4),
            ("Achieving personal and professional growth", 3),
            ("Financial security and stability", 2),
        ]),
        q(55, General, "teamwork", QuestionKind::Mcq,
          "How do you handle conflict in the workplace?", &[
            ("Address it directly and work toward resolution", 5),
            ("Listen to all sides and mediate", 4),
            ("Focus on finding common ground", 3),
            ("Avoid confrontation when possible", 2),
        ]),
    ]
});

/// The full bank in its fixed display order.
pub fn all() -> &'static [QuizQuestion] {
    &QUESTION_BANK
}

/// Resolves a question by its stable id.
pub fn question_by_id(id: i64) -> Option<&'static QuizQuestion> {
    QUESTION_BANK.iter().find(|question| question.id == id)
}

/// Questions tagged with the given field identifier. An unknown or
/// unmatched value yields an empty list, never an error.
pub fn questions_by_field(field: &str) -> Vec<&'static QuizQuestion> {
    QUESTION_BANK
        .iter()
        .filter(|question| question.field.as_str() == field)
        .collect()
}

/// Questions tagged with the given category. Same contract as
/// [`questions_by_field`].
pub fn questions_by_category(category: &str) -> Vec<&'static QuizQuestion> {
    QUESTION_BANK
        .iter()
        .filter(|question| question.category == category)
        .collect()
}

/// Display name for a field identifier. Failing here means the bank and
/// the field enumeration have drifted apart, so the error propagates
/// rather than degrading.
pub fn field_display_name(field: &str) -> Result<&'static str, QuizError> {
    Ok(CareerField::parse(field)?.display_name())
}

/// Display name for a category identifier, if it is a known one.
pub fn category_display_name(category: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, name)| *name)
}
