//! Built-in seed corpus

use crate::category::EmotionCategory;
use crate::verse::NewVerse;
use serde::{Deserialize, Serialize};

use EmotionCategory::*;

/// Which built-in corpus a repository starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeedVariant {
    /// Eight verses per category, one for `anything`
    #[default]
    Full,
    /// One or two verses per category
    Minimal,
    /// No built-in verses
    Empty,
}

type SeedEntry = (EmotionCategory, &'static str, &'static str, &'static str);

const CORPUS: &[SeedEntry] = &[
    // anxious
    (Anxious, "Therefore do not worry about tomorrow, for tomorrow will worry about itself. Each day has enough trouble of its own.", "Matthew 6:34",
        "Your anxious thoughts don't define your future. God holds tomorrow in His hands, and He invites you to rest in His peace today. Take a deep breath and trust in His perfect timing."),
    (Anxious, "Do not be anxious about anything, but in every situation, by prayer and petition, with thanksgiving, present your requests to God.", "Philippians 4:6",
        "Anxiety is not a sign of weak faith. It's an invitation to bring your concerns to the One who cares for you completely. Pour out your heart to Him."),
    (Anxious, "And the peace of God, which transcends all understanding, will guard your hearts and your minds in Christ Jesus.", "Philippians 4:7",
        "You don't have to understand everything to be at peace. Let His peace stand guard over your heart tonight."),
    (Anxious, "Peace I leave with you; my peace I give you. I do not give to you as the world gives. Do not let your hearts be troubled and do not be afraid.", "John 14:27",
        "The peace Jesus offers isn't fragile. It holds even when circumstances shake."),
    (Anxious, "When anxiety was great within me, your consolation brought me joy.", "Psalm 94:19",
        "Great anxiety can meet an even greater comfort. Let Him console you right where you are."),
    (Anxious, "You will keep in perfect peace those whose minds are steadfast, because they trust in you.", "Isaiah 26:3",
        "Fix your thoughts on Him, one moment at a time. Perfect peace grows from steady trust."),
    (Anxious, "Can any one of you by worrying add a single hour to your life?", "Matthew 6:27",
        "Worry promises control but never delivers it. You can set it down and still be held."),
    (Anxious, "The Lord is my light and my salvation; whom shall I fear? The Lord is the stronghold of my life; of whom shall I be afraid?", "Psalm 27:1",
        "Fear shrinks when you remember who stands beside you. You are sheltered."),
    // happy
    (Happy, "This is the day that the Lord has made; let us rejoice and be glad in it.", "Psalm 118:24",
        "Your joy is a gift from God. Let it shine brightly and be a blessing to others around you today. Share this happiness with those who need it."),
    (Happy, "Rejoice in the Lord always. I will say it again: Rejoice!", "Philippians 4:4",
        "Joy is worth repeating. Celebrate what God is doing in your life today."),
    (Happy, "A cheerful heart is good medicine, but a crushed spirit dries up the bones.", "Proverbs 17:22",
        "Your laughter is healing, for you and for everyone who hears it."),
    (Happy, "You make known to me the path of life; you will fill me with joy in your presence, with eternal pleasures at your right hand.", "Psalm 16:11",
        "The deepest joy is found close to Him. Enjoy His presence in this good moment."),
    (Happy, "The joy of the Lord is your strength.", "Nehemiah 8:10",
        "Joy isn't frivolous. It is fuel. Let today's gladness carry you forward."),
    (Happy, "May the God of hope fill you with all joy and peace as you trust in him, so that you may overflow with hope by the power of the Holy Spirit.", "Romans 15:13",
        "Let your joy overflow. Someone nearby needs the hope you're carrying."),
    (Happy, "Shout for joy to the Lord, all the earth. Worship the Lord with gladness; come before him with joyful songs.", "Psalm 100:1-2",
        "Go ahead and sing. Gladness is a form of worship."),
    (Happy, "Every good and perfect gift is from above, coming down from the Father of the heavenly lights.", "James 1:17",
        "Whatever made you smile today, trace it back to the Giver and say thank you."),
    // sad
    (Sad, "The Lord is close to the brokenhearted and saves those who are crushed in spirit.", "Psalm 34:18",
        "Your tears are precious to God. He sees every sorrow and collects every tear. You are not alone in your pain, and healing will come in His perfect time."),
    (Sad, "He heals the brokenhearted and binds up their wounds.", "Psalm 147:3",
        "Broken places are where His care is most tender. Let Him tend to your wounds."),
    (Sad, "Blessed are those who mourn, for they will be comforted.", "Matthew 5:4",
        "Mourning is not the end of the story. Comfort is promised to you."),
    (Sad, "Weeping may stay for the night, but rejoicing comes in the morning.", "Psalm 30:5",
        "This night will not last forever. Morning is on its way."),
    (Sad, "He will wipe every tear from their eyes. There will be no more death or mourning or crying or pain.", "Revelation 21:4",
        "Every tear you cry is seen, and one day every tear will be wiped away."),
    (Sad, "Why, my soul, are you downcast? Why so disturbed within me? Put your hope in God, for I will yet praise him, my Savior and my God.", "Psalm 42:11",
        "It's okay to ask hard questions of your own heart. Hope is still within reach."),
    (Sad, "Come to me, all you who are weary and burdened, and I will give you rest.", "Matthew 11:28",
        "You don't have to carry this heaviness alone. Come and rest."),
    (Sad, "My flesh and my heart may fail, but God is the strength of my heart and my portion forever.", "Psalm 73:26",
        "When your own strength runs out, His doesn't. Lean on Him."),
    // grateful
    (Grateful, "Give thanks to the Lord, for he is good; his love endures forever.", "Psalm 107:1",
        "Gratitude transforms our perspective and opens our hearts to see God's goodness in every circumstance. Your thankful heart is a beautiful offering to Him."),
    (Grateful, "Give thanks in all circumstances; for this is God's will for you in Christ Jesus.", "1 Thessalonians 5:18",
        "Thankfulness isn't only for easy days. It changes how we see every day."),
    (Grateful, "Enter his gates with thanksgiving and his courts with praise; give thanks to him and praise his name.", "Psalm 100:4",
        "Gratitude is the doorway into His presence. Walk right in."),
    (Grateful, "Let the peace of Christ rule in your hearts, since as members of one body you were called to peace. And be thankful.", "Colossians 3:15",
        "Peace and thankfulness grow together. Tend both today."),
    (Grateful, "I will give thanks to you, Lord, with all my heart; I will tell of all your wonderful deeds.", "Psalm 9:1",
        "Tell someone what God has done for you. Gratitude shared is gratitude multiplied."),
    (Grateful, "Praise the Lord, my soul, and forget not all his benefits.", "Psalm 103:2",
        "Take a moment to remember. You have been given so much."),
    (Grateful, "Thanks be to God for his indescribable gift!", "2 Corinthians 9:15",
        "Some gifts are too big for words. A thankful heart says it anyway."),
    (Grateful, "Oh give thanks to the Lord; call upon his name; make known his deeds among the peoples!", "1 Chronicles 16:8",
        "Your story of thanks might be exactly what someone needs to hear."),
    // strength
    (Strength, "I can do all this through him who gives me strength.", "Philippians 4:13",
        "Your strength doesn't come from within alone - it flows from the infinite power of God who loves you. You are capable of more than you know because He is with you."),
    (Strength, "But those who hope in the Lord will renew their strength. They will soar on wings like eagles; they will run and not grow weary, they will walk and not be faint.", "Isaiah 40:31",
        "Renewal is coming. Hope in Him, and you will rise again."),
    (Strength, "Have I not commanded you? Be strong and courageous. Do not be afraid; do not be discouraged, for the Lord your God will be with you wherever you go.", "Joshua 1:9",
        "Courage doesn't mean you aren't afraid. It means you don't walk alone."),
    (Strength, "God is our refuge and strength, an ever-present help in trouble.", "Psalm 46:1",
        "In the middle of trouble, help is already present. Reach for it."),
    (Strength, "My grace is sufficient for you, for my power is made perfect in weakness.", "2 Corinthians 12:9",
        "Your weakness isn't a disqualification. It's where His power shows up best."),
    (Strength, "So do not fear, for I am with you; do not be dismayed, for I am your God. I will strengthen you and help you; I will uphold you with my righteous right hand.", "Isaiah 41:10",
        "You are upheld. Even when your grip slips, His doesn't."),
    (Strength, "The Lord is my strength and my shield; my heart trusts in him, and he helps me.", "Psalm 28:7",
        "Let Him be your shield today. You don't have to defend yourself alone."),
    (Strength, "Finally, be strong in the Lord and in his mighty power.", "Ephesians 6:10",
        "Borrow strength today. There is more than enough to go around."),
    // lonely
    (Lonely, "Never will I leave you; never will I forsake you.", "Hebrews 13:5",
        "Even when you feel completely alone, you are held in the arms of a God who will never abandon you. His presence is constant, His love unwavering."),
    (Lonely, "And surely I am with you always, to the very end of the age.", "Matthew 28:20",
        "Always means always. There is no moment when you are truly alone."),
    (Lonely, "God sets the lonely in families, he leads out the prisoners with singing.", "Psalm 68:6",
        "Belonging is God's design for you. Watch for the people He is placing in your path."),
    (Lonely, "The Lord himself goes before you and will be with you; he will never leave you nor forsake you. Do not be afraid; do not be discouraged.", "Deuteronomy 31:8",
        "He is already ahead of you, waiting in the places you're headed."),
    (Lonely, "Turn to me and be gracious to me, for I am lonely and afflicted.", "Psalm 25:16",
        "It's okay to tell God you're lonely. He listens to honest prayers."),
    (Lonely, "When you pass through the waters, I will be with you; and when you pass through the rivers, they will not sweep over you.", "Isaiah 43:2",
        "Deep waters don't mean you're on your own. He is in them with you."),
    (Lonely, "Where can I go from your Spirit? Where can I flee from your presence?", "Psalm 139:7",
        "There is nowhere you can go that is beyond His reach."),
    (Lonely, "Though my father and mother forsake me, the Lord will receive me.", "Psalm 27:10",
        "Even when people fail you, you are received and welcomed by Him."),
    // guidance
    (Guidance, "Trust in the Lord with all your heart and lean not on your own understanding; in all your ways submit to him, and he will make your paths straight.", "Proverbs 3:5-6",
        "When the path ahead seems unclear, remember that God sees the entire journey. Trust His guidance even when you can't see the next step clearly."),
    (Guidance, "Your word is a lamp for my feet, a light on my path.", "Psalm 119:105",
        "You don't need to see the whole road. Enough light for the next step is enough."),
    (Guidance, "I will instruct you and teach you in the way you should go; I will counsel you with my loving eye on you.", "Psalm 32:8",
        "You are being watched over with love, not judgment. Ask for counsel."),
    (Guidance, "If any of you lacks wisdom, you should ask God, who gives generously to all without finding fault, and it will be given to you.", "James 1:5",
        "Wisdom is available for the asking. Ask boldly."),
    (Guidance, "Whether you turn to the right or to the left, your ears will hear a voice behind you, saying, \"This is the way; walk in it.\"", "Isaiah 30:21",
        "Listen closely. Direction often comes quietly."),
    (Guidance, "In their hearts humans plan their course, but the Lord establishes their steps.", "Proverbs 16:9",
        "Make your plans with open hands. He will steady your steps."),
    (Guidance, "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, plans to give you hope and a future.", "Jeremiah 29:11",
        "Your future is held by someone who wishes you well."),
    (Guidance, "Show me your ways, Lord, teach me your paths. Guide me in your truth and teach me.", "Psalm 25:4-5",
        "A teachable heart is already on the right path."),
    // angry
    (Angry, "In your anger do not sin: Do not let the sun go down while you are still angry.", "Ephesians 4:26",
        "Your anger is valid, but it doesn't have to control you. God offers you peace and wisdom to handle difficult emotions in healthy ways."),
    (Angry, "Everyone should be quick to listen, slow to speak and slow to become angry, because human anger does not produce the righteousness that God desires.", "James 1:19-20",
        "Pause before you respond. Listening first can change everything."),
    (Angry, "A gentle answer turns away wrath, but a harsh word stirs up anger.", "Proverbs 15:1",
        "Gentleness is not weakness. It is strength under control."),
    (Angry, "Refrain from anger and turn from wrath; do not fret, it leads only to evil.", "Psalm 37:8",
        "You can choose to let this go. Fretting only feeds the fire."),
    (Angry, "Whoever is patient has great understanding, but one who is quick-tempered displays folly.", "Proverbs 14:29",
        "Patience buys you time to see the whole picture."),
    (Angry, "Get rid of all bitterness, rage and anger, brawling and slander, along with every form of malice. Be kind and compassionate to one another, forgiving each other.", "Ephesians 4:31-32",
        "Forgiveness frees you first. Set down what is weighing on you."),
    (Angry, "Do not repay anyone evil for evil. If it is possible, as far as it depends on you, live at peace with everyone.", "Romans 12:17-18",
        "Do your part for peace. The rest is not yours to carry."),
    (Angry, "Better a patient person than a warrior, one with self-control than one who takes a city.", "Proverbs 16:32",
        "Self-control is a victory worth more than winning the argument."),
    // anything
    (Anything, "Cast all your anxiety on him because he cares for you.", "1 Peter 5:7",
        "Every emotion you feel is valid. God sees your struggles and walks with you through every season of life. You are loved, you are valued, and you are never forgotten."),
];

fn minimal_count(category: EmotionCategory) -> usize {
    match category {
        Anxious => 2,
        _ => 1,
    }
}

/// Built-in verses for `variant`, in insertion order
pub fn seed_corpus(variant: SeedVariant) -> Vec<NewVerse> {
    let to_verse = |(emotion, text, reference, message): &SeedEntry| {
        NewVerse::new(*emotion, *text, *reference, *message)
    };

    match variant {
        SeedVariant::Full => CORPUS.iter().map(to_verse).collect(),
        SeedVariant::Minimal => EmotionCategory::ALL
            .iter()
            .flat_map(|category| {
                CORPUS
                    .iter()
                    .filter(move |(emotion, ..)| emotion == category)
                    .take(minimal_count(*category))
            })
            .map(to_verse)
            .collect(),
        SeedVariant::Empty => Vec::new(),
    }
}
