//! Static rule tables for label descriptions and coarse categories.
//!
//! Rules are evaluated in listed order; keep broader families (e.g. birds)
//! ahead of ones whose keywords they could shadow (e.g. mammals).

/// One description family: a tag for diagnostics, the keyword set that
/// matches labels into the family, and the blurb appended to the label.
pub(crate) struct DescriptionRule {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
    pub blurb: &'static str,
}

pub(crate) const DESCRIPTION_RULES: &[DescriptionRule] = &[
    DescriptionRule {
        tag: "aquatic-reptile",
        keywords: &[
            "fish", "shark", "ray", "turtle", "frog", "lizard", "snake", "crocodile",
            "alligator", "salamander", "newt", "gecko", "chameleon", "iguana", "dragon",
            "whale", "dolphin", "seal",
        ],
        blurb: "an aquatic or reptilian creature with distinctive physical characteristics, \
                unique behavioral patterns, and remarkable adaptations to its natural environment",
    },
    DescriptionRule {
        tag: "bird",
        keywords: &[
            "bird", "eagle", "owl", "parrot", "penguin", "chicken", "duck", "goose", "swan",
            "turkey", "pigeon", "dove", "sparrow", "robin", "cardinal", "jay", "finch",
            "bunting", "bulbul", "magpie", "chickadee", "ouzel", "kite", "vulture", "flamingo",
            "peacock", "ostrich", "emu", "toucan", "hummingbird", "cock", "hen", "brambling",
            "goldfinch", "junco", "indigo", "wren", "thrush", "warbler", "tanager", "grosbeak",
            "crossbill", "oriole", "blackbird", "starling", "shrike", "waxwing", "mockingbird",
            "nuthatch", "plover", "sandpiper", "crane", "albatross", "petrel", "pelican",
            "cormorant", "loon", "puffin", "grebe",
        ],
        blurb: "a feathered avian species with distinctive plumage, unique flight patterns, \
                and characteristic behaviors that make it easily recognizable in its natural habitat",
    },
    DescriptionRule {
        tag: "mammal",
        keywords: &[
            "dog", "cat", "horse", "cow", "sheep", "goat", "pig", "donkey", "bear", "lion",
            "tiger", "leopard", "cheetah", "jaguar", "wolf", "fox", "rabbit", "squirrel",
            "mouse", "rat", "hamster", "deer", "moose", "elk", "reindeer", "giraffe", "zebra",
            "hippopotamus", "rhinoceros", "camel", "llama", "alpaca", "kangaroo", "koala",
            "monkey", "gorilla", "chimpanzee", "orangutan", "baboon", "panda", "elephant",
            "hedgehog", "guinea pig", "wombat", "wallaby", "echidna", "platypus",
        ],
        blurb: "a mammalian creature with distinct physical attributes, unique behavioral \
                traits, and characteristic features that distinguish it from other species \
                in the animal kingdom",
    },
    DescriptionRule {
        tag: "vehicle",
        keywords: &[
            "car", "truck", "bus", "motorcycle", "bicycle", "train", "airplane", "helicopter",
            "boat", "ship", "yacht", "sailboat", "submarine", "ambulance", "taxi", "limousine",
            "van", "pickup", "tractor", "bulldozer", "excavator", "scooter", "locomotive",
            "liner", "airship", "convertible", "minivan", "jeep", "trailer",
        ],
        blurb: "a transportation vehicle designed for mobility, featuring distinctive \
                engineering characteristics, functional design elements, and recognizable \
                structural components that serve specific transportation purposes",
    },
    DescriptionRule {
        tag: "fruit",
        keywords: &[
            "apple", "banana", "orange", "lemon", "lime", "grape", "strawberry", "blueberry",
            "raspberry", "watermelon", "pineapple", "mango", "peach", "pear", "cherry",
            "coconut", "avocado", "pomegranate", "fig", "plum", "apricot", "nectarine",
        ],
        blurb: "a natural fruit with distinctive color, texture, and flavor characteristics, \
                featuring unique nutritional properties and recognizable physical attributes \
                that make it easily identifiable",
    },
    DescriptionRule {
        tag: "vegetable",
        keywords: &[
            "carrot", "potato", "tomato", "onion", "garlic", "lettuce", "cabbage", "broccoli",
            "cauliflower", "corn", "pepper", "cucumber", "zucchini", "eggplant", "mushroom",
            "peas", "beans", "spinach", "kale", "celery", "radish", "beet", "turnip", "squash",
        ],
        blurb: "a nutritious vegetable with distinctive color, shape, and texture, featuring \
                unique culinary properties and recognizable characteristics that distinguish \
                it in cooking and nutrition",
    },
    DescriptionRule {
        tag: "prepared-food",
        keywords: &[
            "pizza", "burger", "sandwich", "taco", "burrito", "sushi", "pasta", "spaghetti",
            "bread", "cake", "cookie", "donut", "chocolate", "coffee", "tea", "wine", "beer",
            "soup", "stew", "curry", "salad", "pretzel", "bagel", "waffle", "pancake",
        ],
        blurb: "a prepared food item with distinctive flavor profiles, unique presentation \
                characteristics, and recognizable culinary attributes that make it a popular \
                and easily identifiable dish",
    },
    DescriptionRule {
        tag: "clothing",
        keywords: &[
            "shirt", "dress", "pants", "jeans", "shorts", "jacket", "coat", "hat", "cap",
            "shoes", "sneakers", "boots", "socks", "gloves", "scarf", "tie", "sunglasses",
            "watch", "backpack", "handbag", "wallet", "belt", "vest", "sweater", "hoodie",
            "kimono", "gown", "uniform", "jersey", "mitten", "sandal",
        ],
        blurb: "a garment or accessory designed for personal wear, featuring distinctive \
                style elements, functional design characteristics, and recognizable fashion \
                attributes that serve both practical and aesthetic purposes",
    },
    DescriptionRule {
        tag: "furniture",
        keywords: &[
            "chair", "sofa", "couch", "table", "desk", "bed", "wardrobe", "cabinet", "shelf",
            "lamp", "mirror", "clock", "stool", "bench", "ottoman", "dresser", "nightstand",
            "crib", "bookcase",
        ],
        blurb: "a piece of furniture designed for comfort, utility, and aesthetic appeal, \
                featuring distinctive design elements, functional characteristics, and \
                recognizable structural components that serve specific household purposes",
    },
    DescriptionRule {
        tag: "electronics",
        keywords: &[
            "computer", "laptop", "keyboard", "mouse", "monitor", "phone", "smartphone",
            "tablet", "camera", "television", "radio", "speaker", "headphones", "microphone",
            "printer", "scanner", "router", "modem", "projector",
        ],
        blurb: "an electronic device with advanced technological functionality, featuring \
                distinctive design elements, innovative features, and recognizable components \
                that enable modern digital communication and computing capabilities",
    },
    DescriptionRule {
        tag: "household",
        keywords: &[
            "bottle", "cup", "mug", "plate", "bowl", "fork", "knife", "spoon", "pot", "pan",
            "kettle", "toaster", "refrigerator", "oven", "microwave", "vacuum", "broom",
            "mop", "towel", "toothbrush", "soap", "sponge", "bucket", "basket", "pitcher",
        ],
        blurb: "a household item designed for daily domestic use, featuring functional \
                design characteristics, practical utility features, and recognizable \
                attributes that serve essential home maintenance and comfort purposes",
    },
    DescriptionRule {
        tag: "sports",
        keywords: &[
            "ball", "football", "basketball", "baseball", "volleyball", "skateboard", "skis",
            "snowboard", "surfboard", "frisbee", "dumbbell", "barbell", "racket", "bat",
            "helmet", "paddle", "puck", "goal",
        ],
        blurb: "a sports or recreational equipment item designed for physical activity, \
                featuring distinctive functional characteristics, performance-oriented design \
                elements, and recognizable attributes that facilitate athletic engagement \
                and exercise",
    },
    DescriptionRule {
        tag: "instrument",
        keywords: &[
            "guitar", "piano", "violin", "drum", "drums", "trumpet", "saxophone", "flute",
            "harmonica", "accordion", "cello", "viola", "harp", "banjo", "ukulele",
            "clarinet", "trombone", "oboe", "organ",
        ],
        blurb: "a musical instrument designed for creating harmonious sounds, featuring \
                distinctive acoustic properties, unique structural components, and \
                recognizable design elements that enable musical expression and artistic \
                performance",
    },
    DescriptionRule {
        tag: "building",
        keywords: &[
            "house", "building", "church", "tower", "bridge", "castle", "tent", "hut",
            "barn", "warehouse", "skyscraper", "cottage", "mansion", "palace", "temple",
            "mosque", "cathedral", "monastery", "lighthouse", "dome",
        ],
        blurb: "an architectural structure designed for human habitation or specific \
                functional purposes, featuring distinctive design elements, structural \
                characteristics, and recognizable architectural styles that reflect cultural \
                and practical considerations",
    },
    DescriptionRule {
        tag: "nature",
        keywords: &[
            "tree", "flower", "rose", "sunflower", "tulip", "daisy", "leaf", "grass",
            "mountain", "hill", "valley", "river", "lake", "ocean", "beach", "forest",
            "desert", "snow", "cloud", "sun", "moon", "star", "coral", "anemone", "volcano",
            "geyser", "cliff", "reef",
        ],
        blurb: "a natural element from the environment, featuring distinctive physical \
                characteristics, unique ecological properties, and recognizable attributes \
                that reflect the beauty and diversity of the natural world",
    },
    DescriptionRule {
        tag: "tool",
        keywords: &[
            "hammer", "screwdriver", "wrench", "pliers", "saw", "drill", "nail", "screw",
            "tape", "rope", "chain", "lock", "key", "scissors", "stapler", "glue", "brush",
            "axe", "shovel", "chisel", "plunger",
        ],
        blurb: "a practical tool designed for specific tasks and applications, featuring \
                functional design characteristics, ergonomic considerations, and recognizable \
                attributes that enable efficient work and craftsmanship",
    },
    DescriptionRule {
        tag: "insect",
        keywords: &[
            "butterfly", "bee", "wasp", "ant", "spider", "dragonfly", "ladybug", "beetle",
            "grasshopper", "cricket", "moth", "firefly", "mosquito", "fly", "cockroach",
            "mantis", "cicada", "scorpion",
        ],
        blurb: "an insect or arachnid with distinctive physical characteristics, unique \
                behavioral patterns, and recognizable features that reflect the incredible \
                diversity and adaptability of invertebrate life forms",
    },
];

/// Blurb used when no rule matches the label.
pub(crate) const GENERIC_BLURB: &str =
    "a distinctive and recognizable object with unique identifying features, \
     characteristic properties, and notable attributes";

/// One coarse category: keyword set and the sentence reported to the user.
pub(crate) struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub sentence: &'static str,
}

pub(crate) const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &[
            "cat", "dog", "bird", "fish", "horse", "cow", "sheep", "pig", "chicken", "duck",
            "rabbit", "mouse", "bear", "lion", "tiger", "elephant", "zebra", "giraffe",
            "monkey", "panda", "eagle", "shark", "whale", "dolphin", "butterfly", "bee",
            "spider", "turtle", "frog", "lizard", "snake", "crocodile", "alligator",
            "salamander", "newt", "gecko", "chameleon", "iguana", "seal", "walrus",
        ],
        sentence: "This is an animal",
    },
    CategoryRule {
        keywords: &[
            "car", "truck", "bus", "motorcycle", "bicycle", "train", "airplane", "boat",
            "ship", "helicopter", "scooter", "tractor", "bulldozer", "crane", "excavator",
        ],
        sentence: "This is a vehicle",
    },
    CategoryRule {
        keywords: &[
            "apple", "banana", "pizza", "burger", "bread", "cake", "coffee", "tea", "wine",
            "beer", "pasta", "rice", "fruit", "vegetable", "orange", "grape", "strawberry",
        ],
        sentence: "This is food",
    },
    CategoryRule {
        keywords: &["person", "man", "woman", "child", "baby", "boy", "girl"],
        sentence: "This is a person",
    },
    CategoryRule {
        keywords: &["shirt", "dress", "pants", "shoes", "hat", "jacket", "coat", "gloves"],
        sentence: "This is clothing",
    },
    CategoryRule {
        keywords: &["chair", "sofa", "table", "bed", "desk", "cabinet", "shelf", "lamp"],
        sentence: "This is furniture",
    },
    CategoryRule {
        keywords: &["computer", "phone", "camera", "television", "radio", "laptop", "keyboard"],
        sentence: "This is an electronic device",
    },
    CategoryRule {
        keywords: &["hammer", "screwdriver", "wrench", "saw", "drill", "scissors", "pliers"],
        sentence: "This is a tool",
    },
    CategoryRule {
        keywords: &["tree", "flower", "mountain", "river", "ocean", "forest", "sun", "moon", "star"],
        sentence: "This is from nature",
    },
    CategoryRule {
        keywords: &["house", "building", "church", "tower", "bridge", "castle", "tent", "barn"],
        sentence: "This is a building",
    },
];

/// Sentence used when no category rule matches.
pub(crate) const GENERIC_CATEGORY: &str = "This appears to be an object";
