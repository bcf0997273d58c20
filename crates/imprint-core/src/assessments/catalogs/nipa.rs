//! The Neural Imprint Patterns inventory: 343 self-report items across 20
//! behavioral patterns. Item wording is owned by the content team; codes
//! and ordering are load-bearing (reports and the intake progress bar key
//! off declaration order).

use super::super::catalog::QuestionCatalog;
use super::super::domain::{CategoryDefinition, Question, RespondentRole};

type PatternDef = (&'static str, &'static str, &'static [&'static str]);

const PATTERNS: &[PatternDef] = &[
    (
        "focus_drift",
        "Focus Drift",
        &[
            "My mind wanders during conversations",
            "I reread paragraphs because nothing sank in",
            "Long meetings lose me within minutes",
            "I open a browser tab and forget why",
            "Detailed instructions blur together",
            "I drift off mid-task without noticing",
            "Films and lectures rarely hold my attention",
            "I tune out while people give directions",
            "Small sounds pull me out of deep work",
            "I lose my place when switching between tasks",
            "I catch myself staring at nothing",
            "Proofreading my own work feels impossible",
            "I miss turns while driving familiar routes",
            "I forget the question while forming the answer",
            "My notes trail off half-finished",
            "I need reminders to return to what I paused",
            "Conversations in groups are hard to follow",
            "I skim when I intend to read closely",
        ],
    ),
    (
        "impulse_surge",
        "Impulse Surge",
        &[
            "I say things I immediately regret",
            "I buy things on a whim and return them later",
            "I interrupt before others finish their point",
            "I agree to plans before checking my calendar",
            "I send messages I wish I had slept on",
            "I snack without deciding to",
            "I switch lanes or speed up on impulse",
            "I click links and offers without thinking",
            "I abandon queues rather than wait",
            "I blurt answers in meetings",
            "I make big decisions quickly and doubt them slowly",
            "I grab my phone the instant it buzzes",
            "I volunteer for tasks I have no time for",
            "I change plans mid-stream without warning others",
            "I spend money meant for bills on treats",
            "I quit activities the moment they bore me",
            "I fiddle with things on other people's desks",
            "I speak over quiet people without meaning to",
        ],
    ),
    (
        "overdrive",
        "Restless Overdrive",
        &[
            "Sitting still takes conscious effort",
            "My legs bounce whenever I sit",
            "I pace while on phone calls",
            "Relaxing feels like a task",
            "I stand up during long meetings",
            "Quiet evenings make me itch to do something",
            "I drum my fingers without noticing",
            "Holidays leave me restless by day two",
            "I talk faster than people can follow",
            "I juggle several activities to feel settled",
            "Slow walkers and slow talkers test me",
            "I fidget with pens, rings, or zippers",
            "My thoughts race at bedtime",
            "I feel wound up even when tired",
            "I volunteer to fetch things just to move",
            "Long car rides are hard to endure",
            "I shift positions constantly while seated",
            "Stillness feels like wasted time",
        ],
    ),
    (
        "worry_loop",
        "Worry Loops",
        &[
            "Small problems replay in my head for days",
            "I rehearse conversations that may never happen",
            "I expect the worst from unread messages",
            "Falling asleep is delayed by spinning thoughts",
            "I re-check locks, stoves, or sent emails",
            "Uncertainty sits in my stomach",
            "I imagine disasters in ordinary situations",
            "Criticism echoes long after it is given",
            "I ask for reassurance more than once on the same question",
            "Deadlines trigger dread rather than planning",
            "I worry about how much I worry",
            "My health occupies more thought than it should",
            "I scan rooms for things that could go wrong",
            "Decisions stall while I weigh every risk",
            "I apologize before anyone complains",
            "Waiting for results consumes my attention",
            "I keep backup plans for my backup plans",
        ],
    ),
    (
        "mood_swing",
        "Mood Volatility",
        &[
            "My mood can flip within an hour",
            "Small setbacks sink the whole day",
            "I go from calm to boiling quickly",
            "People ask what happened when nothing did",
            "Good news lifts me unreasonably high",
            "I cry more easily than others seem to",
            "Irritability arrives without a clear cause",
            "My enthusiasm burns hot and cools fast",
            "I snap at people I care about",
            "Weather and light change how I feel",
            "I cancel plans because my mood turned",
            "Minor criticism stings for hours",
            "My energy follows my mood wherever it goes",
            "I struggle to name what I am feeling",
            "Others tread carefully around my moods",
            "A single song can swing my state",
            "Mornings and evenings feel like different people",
        ],
    ),
    (
        "sleep_debt",
        "Sleep & Recovery",
        &[
            "I wake unrefreshed most mornings",
            "Falling asleep takes me over half an hour",
            "I wake in the night and stay awake",
            "Screens keep me up past my intention",
            "I need caffeine to feel functional",
            "Weekend lie-ins never catch me up",
            "I doze during films or reading",
            "My sleep schedule drifts later and later",
            "I snooze multiple alarms",
            "Afternoon slumps flatten my productivity",
            "I remember almost none of my dreams",
            "I put off bedtime even when exhausted",
            "Mornings are a fog for the first hour",
            "I sleep poorly before ordinary days, not just big ones",
            "Naps leave me groggier than before",
            "I run on six hours and feel every minute of it",
            "Rest days leave me as tired as work days",
        ],
    ),
    (
        "sensory_flood",
        "Sensory Flooding",
        &[
            "Busy supermarkets drain me fast",
            "Scratchy fabric is unbearable",
            "Overlapping conversations overwhelm me",
            "Bright light gives me headaches",
            "I notice smells others miss",
            "Sudden noises jolt me badly",
            "Crowds press on me physically",
            "I cut tags out of clothing",
            "Background music makes conversation hard",
            "Certain food textures are impossible for me",
            "Open-plan offices exhaust me",
            "I flinch at unexpected touch",
            "Fluorescent flicker sets my teeth on edge",
            "I need silence to concentrate",
            "Strong perfume ruins a room for me",
            "After busy days I need to be alone in the dark",
            "I hear the fridge, the clock, and the neighbor all at once",
        ],
    ),
    (
        "memory_slip",
        "Working Memory Slips",
        &[
            "I walk into rooms and forget why",
            "Names vanish seconds after introductions",
            "I lose track of multi-step instructions",
            "Mental arithmetic falls apart midway",
            "I forget ingredients unless the recipe stays open",
            "Phone numbers won't stay in my head long enough to dial",
            "I repeat questions I already asked",
            "Shopping without a list means forgetting something",
            "I lose the thread of my own sentences",
            "Passwords and codes refuse to stick",
            "I forget whether I locked the door moments after leaving",
            "I retell stories because I forget who heard them",
            "Dates and times swap themselves in my memory",
            "I need directions repeated twice",
            "Items in my hands go missing",
            "I forget messages I meant to pass on",
            "From a list I retain the first and last items only",
        ],
    ),
    (
        "planning_fog",
        "Planning Fog",
        &[
            "I underestimate how long tasks take",
            "Projects start without a clear plan",
            "I tackle whatever shouts loudest, not what matters",
            "Packing for trips happens at the last minute",
            "Breaking big goals into steps stumps me",
            "My to-do lists multiply without shrinking",
            "Deadlines arrive as surprises",
            "I double-book myself",
            "Planning meals for the week feels unmanageable",
            "I start the hard part too late in the day",
            "Paperwork piles up until it becomes urgent",
            "I misjudge what can fit into a morning",
            "Plans collapse when the first step slips",
            "I rarely build in buffer time",
            "Events sneak up despite being on the calendar",
            "I reorganize systems instead of doing the work",
            "My bag gets packed on the way out the door",
        ],
    ),
    (
        "social_static",
        "Social Static",
        &[
            "Small talk drains more than it gives",
            "I miss the moment to join a conversation",
            "Jokes land late for me",
            "I misread tone in messages",
            "Groups feel harder than one-on-one",
            "I rehearse what to say and miss what is said",
            "Eye contact takes deliberate effort",
            "I stand at the edges of gatherings",
            "Invitations feel like obligations",
            "I lose track of whose turn it is to speak",
            "Parties leave me depleted for a day",
            "I avoid phone calls when a text might do",
            "New groups take me months to feel part of",
            "I interrupt by accident or wait too long",
            "My goodbyes are awkwardly timed",
            "I replay social moments hunting for mistakes",
            "Networking events feel like exams",
        ],
    ),
    (
        "empathy_gap",
        "Empathy Gap",
        &[
            "I notice distress only when it is spelled out",
            "Comforting others feels scripted",
            "I offer solutions when people want listening",
            "Tears around me leave me unsure what to do",
            "I forget to ask how others are doing",
            "Hints sail past me",
            "I misjudge when a joke will hurt",
            "Others' excitement is hard for me to mirror",
            "I learn about conflicts after they have ended",
            "People say I am hard to read",
            "I need feelings explained like facts",
            "Celebrations matter less to me than to others",
            "I miss anniversaries and meaningful dates",
            "Apologies are hard for me to shape",
            "I underestimate how much my words weigh",
            "Greeting cards stump me past the first line",
            "I notice the task before the person doing it",
        ],
    ),
    (
        "rigid_rails",
        "Rigid Thinking",
        &[
            "Changed plans unsettle my whole day",
            "I defend my first idea past its usefulness",
            "New methods feel wrong even when better",
            "I order the same dishes everywhere",
            "Detours and diversions spike my stress",
            "Rules feel binding even when pointless",
            "I finish books and shows I stopped enjoying",
            "Rearranged furniture bothers me for weeks",
            "Compromise feels like losing",
            "I resist updates to tools that worked",
            "Surprise guests throw off my evening",
            "My routines have routines",
            "Things are either right or wrong for me",
            "I correct small inaccuracies nobody cares about",
            "Stand-ins and substitutes unsettle me",
            "Improvising makes me freeze",
            "I need to know the plan before I can enjoy the day",
        ],
    ),
    (
        "reward_chase",
        "Reward Chasing",
        &[
            "I refresh feeds hunting for something new",
            "Delayed rewards lose their pull on me",
            "I enjoy the next purchase more than the last one",
            "Streaks and points hook me fast",
            "I snack for stimulation, not hunger",
            "Boredom feels physically uncomfortable",
            "I gamble small amounts for the spark",
            "New hobbies blaze and fizzle within weeks",
            "Sales and limited offers override my plans",
            "I promise myself one episode and watch five",
            "Novelty beats quality in my choices",
            "I check for likes soon after posting",
            "Routine work needs a treat attached",
            "I keep several games or apps in rotation",
            "Slow progress kills my motivation",
            "I bail on goals when the excitement fades",
            "Planning the trip thrills me more than the trip",
        ],
    ),
    (
        "stress_spike",
        "Stress Spikes",
        &[
            "Pressure hits my body before my mind",
            "My shoulders live beside my ears",
            "Deadlines make my heart pound",
            "I hold my breath while concentrating",
            "Small surprises send a jolt through me",
            "My jaw aches from clenching",
            "Stress shows up as stomach trouble",
            "I sweat through difficult conversations",
            "After conflict I shake for a while",
            "Headaches follow hard days",
            "My voice tightens when stakes rise",
            "I startle easily under load",
            "Relaxation exercises make me more aware of tension",
            "Stress steals my appetite or doubles it",
            "I grind my teeth at night",
            "Recovering from a stressful event takes me days",
            "My skin and stomach report stress before I admit it",
        ],
    ),
    (
        "inner_critic",
        "Inner Critic",
        &[
            "My inner voice is harsher than any boss",
            "Compliments bounce off while criticism sticks",
            "I call myself names I would never call others",
            "Finished work still feels not good enough",
            "I compare my worst to others' best",
            "Mistakes replay in my head at night",
            "I write my achievements off as luck",
            "Asking for help feels like admitting failure",
            "I expect to be found out as a fraud",
            "Photos of myself make me wince",
            "I apologize for taking up space",
            "Praise makes me suspicious",
            "I set standards I would call unfair for anyone else",
            "Old embarrassments still make me flinch",
            "I audition my sentences before speaking",
            "Rest feels undeserved until everything is done",
            "My failures get headlines and my successes get footnotes",
        ],
    ),
    (
        "energy_crash",
        "Energy Crashes",
        &[
            "My energy drops off a cliff mid-afternoon",
            "Mornings start at half power",
            "Meals make me sleepy rather than fueled",
            "I run on bursts followed by slumps",
            "Stairs tire me more than they should",
            "By Friday I am running on fumes",
            "Sugar lifts me briefly and drops me hard",
            "I budget energy like money and still overdraw",
            "Socializing spends energy I need for work",
            "Exercise wipes me out instead of energizing me",
            "I cancel evening plans I made at noon",
            "Recovery from a late night takes days",
            "Concentration costs me physical energy",
            "I yawn through the second half of every day",
            "Errands must be batched or they won't happen",
            "Hot weather flattens me",
            "I am either wired or drained, rarely steady",
        ],
    ),
    (
        "learning_drag",
        "Learning Drag",
        &[
            "Instructions make sense only after I try and fail",
            "Reading manuals puts me to sleep",
            "I learn by doing or not at all",
            "New software takes me twice as long as colleagues",
            "Lectures wash over me without sticking",
            "I need examples before rules mean anything",
            "Studying meant rereading everything several times",
            "Diagrams help me where paragraphs fail",
            "I forget training within a week unless I use it",
            "Tests never showed what I actually knew",
            "I ask questions others apparently didn't need to",
            "Step-by-step videos beat written guides for me",
            "Jargon shuts my comprehension down",
            "I take notes I can never decipher later",
            "Learning under observation makes me clumsy",
            "Fast talkers and new accents lose me",
            "Theory only lands once I see the use",
        ],
    ),
    (
        "word_tangle",
        "Word Tangles",
        &[
            "Words sit on the tip of my tongue daily",
            "I swap words without noticing until others laugh",
            "Explaining something simple comes out complicated",
            "I lose nouns first when tired",
            "Writing flows while speaking stalls, or the reverse",
            "I talk around a word I cannot find",
            "Names of familiar things vanish mid-sentence",
            "My sentences change direction halfway",
            "I mishear lyrics and quotes constantly",
            "Telling a story, I bury the point in detail",
            "I rehearse phone calls before dialing",
            "Fast group chats leave me composing too slowly",
            "I say 'thing' and 'stuff' more than actual names",
            "Punchlines arrive with the wrong word",
            "Under pressure my vocabulary halves",
            "I write three drafts of a two-line email",
            "Translating thought to speech loses something",
        ],
    ),
    (
        "habit_lock",
        "Habit Lock",
        &[
            "I eat the same breakfast for months",
            "New Year resolutions rarely survive January",
            "My commute never varies",
            "I sit in the same seat everywhere",
            "Bad habits outlive my reasons for them",
            "I snack at the same hour regardless of hunger",
            "Routines continue after they stop serving me",
            "I check my phone apps in the same order each time",
            "Trying a new restaurant takes persuasion",
            "My weekends follow a template",
            "I rebuy the same clothes in the same colors",
            "Automatic behaviors run before I notice them",
            "I bite nails or pick at skin on autopilot",
            "Changing toothpaste brands feels like an event",
            "My browser opens the same three sites unbidden",
            "Habits form fast for me and dissolve slowly",
            "I take the long way because it is the usual way",
        ],
    ),
    (
        "bounce_back",
        "Low Resilience",
        &[
            "Setbacks knock me down for longer than others",
            "One bad remark cancels ten good ones",
            "I avoid risks after a single failure",
            "Doors that reject me stay closed forever",
            "Bad mornings become bad days become bad weeks",
            "I quit hobbies at the first plateau",
            "Criticism makes me want to start over entirely",
            "I dwell on losses long after the game",
            "A plan B feels like defeat rather than strategy",
            "Recovering from embarrassment takes me weeks",
            "A failed recipe ends my cooking for the month",
            "I read failure as a verdict, not an event",
            "Small illnesses derail my routines entirely",
            "I need long runways to restart after interruptions",
            "Lost progress makes me abandon the whole project",
            "I brace for the next blow instead of rebuilding",
            "Starting over feels heavier each time",
        ],
    ),
];

pub(super) fn build() -> QuestionCatalog {
    let categories = PATTERNS
        .iter()
        .map(|(code, name, _)| CategoryDefinition {
            code: (*code).to_string(),
            display_name: (*name).to_string(),
        })
        .collect();

    let mut questions = Vec::new();
    let mut id = 0u32;
    for (code, _, items) in PATTERNS {
        for text in *items {
            id += 1;
            questions.push(Question {
                id,
                category_code: (*code).to_string(),
                text: (*text).to_string(),
                eligible_roles: vec![RespondentRole::Adult],
            });
        }
    }

    QuestionCatalog::new(categories, questions)
        .expect("built-in NIPA catalog is internally consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_carries_343_items_across_20_patterns() {
        let catalog = build();
        assert_eq!(catalog.categories().len(), 20);
        assert_eq!(catalog.questions().len(), 343);
        assert_eq!(catalog.question_count_for(RespondentRole::Adult), 343);
    }
}
