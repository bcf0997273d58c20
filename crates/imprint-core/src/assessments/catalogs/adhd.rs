use super::super::catalog::QuestionCatalog;
use super::super::domain::{CategoryDefinition, Question, RespondentRole};

const INATTENTION: &str = "inattention";
const HYPERACTIVITY: &str = "hyperactivity";

fn categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            code: INATTENTION.to_string(),
            display_name: "Inattention".to_string(),
        },
        CategoryDefinition {
            code: HYPERACTIVITY.to_string(),
            display_name: "Hyperactivity & Impulsivity".to_string(),
        },
    ]
}

fn build(items: &[(&str, &str)], roles: &[RespondentRole]) -> QuestionCatalog {
    let questions = items
        .iter()
        .enumerate()
        .map(|(index, (code, text))| Question {
            id: index as u32 + 1,
            category_code: (*code).to_string(),
            text: (*text).to_string(),
            eligible_roles: roles.to_vec(),
        })
        .collect();

    QuestionCatalog::new(categories(), questions)
        .expect("built-in ADHD screener catalog is internally consistent")
}

const ADULT_ITEMS: &[(&str, &str)] = &[
    (INATTENTION, "I make careless mistakes even in work I know well"),
    (INATTENTION, "I lose focus partway through long tasks"),
    (INATTENTION, "People tell me I don't seem to listen when spoken to directly"),
    (INATTENTION, "I start projects but drift away before finishing them"),
    (INATTENTION, "I struggle to keep paperwork and deadlines organized"),
    (INATTENTION, "I put off tasks that need sustained mental effort"),
    (INATTENTION, "I misplace keys, phone, or documents I need daily"),
    (INATTENTION, "Background noise or movement pulls my attention away"),
    (INATTENTION, "I forget appointments and errands unless reminded"),
    (HYPERACTIVITY, "I fidget or tap my hands and feet when seated"),
    (HYPERACTIVITY, "I find it hard to stay seated through long meetings"),
    (HYPERACTIVITY, "I feel restless even when relaxing"),
    (HYPERACTIVITY, "I have trouble unwinding quietly at the end of the day"),
    (HYPERACTIVITY, "I feel driven to keep moving, as if by a motor"),
    (HYPERACTIVITY, "I talk over people without meaning to"),
    (HYPERACTIVITY, "I blurt out answers before a question is finished"),
    (HYPERACTIVITY, "Waiting in lines wears my patience thin"),
    (HYPERACTIVITY, "I step into conversations or tasks uninvited"),
];

const CHILD_ITEMS: &[(&str, &str)] = &[
    (INATTENTION, "Fails to give close attention to details in schoolwork"),
    (INATTENTION, "Has trouble keeping attention on tasks or play"),
    (INATTENTION, "Does not seem to listen when spoken to directly"),
    (INATTENTION, "Starts chores or homework but does not finish them"),
    (INATTENTION, "Has difficulty organizing tasks and belongings"),
    (INATTENTION, "Avoids tasks that need sustained mental effort"),
    (INATTENTION, "Loses things needed for school or activities"),
    (INATTENTION, "Is easily distracted by things going on nearby"),
    (INATTENTION, "Is forgetful in daily routines"),
    (HYPERACTIVITY, "Fidgets with hands or squirms in the seat"),
    (HYPERACTIVITY, "Leaves the seat when staying seated is expected"),
    (HYPERACTIVITY, "Runs about or climbs when it is not appropriate"),
    (HYPERACTIVITY, "Has difficulty playing quietly"),
    (HYPERACTIVITY, "Is on the go, as if driven by a motor"),
    (HYPERACTIVITY, "Talks excessively"),
    (HYPERACTIVITY, "Blurts out answers before questions are completed"),
    (HYPERACTIVITY, "Has difficulty waiting for a turn"),
    (HYPERACTIVITY, "Interrupts or intrudes on others' games or conversations"),
];

const TEEN_ITEMS: &[(&str, &str)] = &[
    (INATTENTION, "Overlooks details in homework or part-time work"),
    (INATTENTION, "Loses focus during classes or long assignments"),
    (INATTENTION, "Seems elsewhere during face-to-face conversations"),
    (INATTENTION, "Leaves assignments and projects unfinished"),
    (INATTENTION, "Struggles to keep school materials and deadlines in order"),
    (INATTENTION, "Puts off homework that needs sustained concentration"),
    (INATTENTION, "Misplaces phone, keys, or school supplies"),
    (INATTENTION, "Is pulled off task by phones, chatter, or passing activity"),
    (INATTENTION, "Forgets chores, practices, or appointments"),
    (HYPERACTIVITY, "Fidgets, taps, or squirms through classes and meals"),
    (HYPERACTIVITY, "Finds it hard to stay seated through a full lesson"),
    (HYPERACTIVITY, "Feels restless during quiet activities"),
    (HYPERACTIVITY, "Has trouble relaxing without a screen or motion"),
    (HYPERACTIVITY, "Seems driven to stay busy from waking to bedtime"),
    (HYPERACTIVITY, "Talks over friends and family in conversation"),
    (HYPERACTIVITY, "Answers before the other person finishes asking"),
    (HYPERACTIVITY, "Gets visibly frustrated when made to wait"),
    (HYPERACTIVITY, "Cuts into conversations or others' activities uninvited"),
];

pub(super) fn build_adult() -> QuestionCatalog {
    build(ADULT_ITEMS, &[RespondentRole::Adult])
}

pub(super) fn build_child() -> QuestionCatalog {
    build(CHILD_ITEMS, &[RespondentRole::Parent, RespondentRole::Caregiver])
}

pub(super) fn build_teen() -> QuestionCatalog {
    build(TEEN_ITEMS, &[RespondentRole::Parent, RespondentRole::Teen])
}
