// Embedded genre table
//
// Order matters: the first entry is the default selection.
// Bump `CATALOG_VERSION` in the parent module when editing.

use super::{Category, GenreRecord, PresetPrompt};

const fn prompt(text: &'static str, description: &'static str) -> PresetPrompt {
    PresetPrompt { text, description }
}

pub static GENRES: &[GenreRecord] = &[
    GenreRecord {
        id: 1,
        name: "Lo-fi Hip Hop",
        category: Category::Standard,
        description: "차분한 비트와 부드러운 재즈 화성이 특징입니다.",
        attributes: [7, 8, 3, 9, 4],
        tags: &["Chill", "Study", "Jazz"],
        prompts: &[
            prompt(
                "lo-fi hip hop, jazzy chords, rainy day atmosphere, vinyl crackle",
                "비 오는 날의 감성적인 재즈 힙합",
            ),
            prompt(
                "chill lo-fi, soft piano melody, slow tempo, relaxing vibe",
                "편안한 피아노 선율의 휴식용 비트",
            ),
            prompt(
                "lofi hiphop, nocturnal, city lights, muted trumpet, smooth bass",
                "도시의 야경과 어울리는 차분한 무드",
            ),
            prompt(
                "study beats, lofi, organic textures, bird chirping, warm pads",
                "공부할 때 듣기 좋은 자연적인 질감",
            ),
            prompt(
                "lofi jazz hop, saxophone, dusty drums, nostalgic, sunset",
                "노스탤지어 무드",
            ),
            prompt(
                "chillhop, electric piano, boom bap drums, relaxed, mellow",
                "여유로운 칠홉 스타일",
            ),
        ],
    },
    GenreRecord {
        id: 2,
        name: "Synthwave",
        category: Category::Standard,
        description: "80년대 복고풍 사운드와 네온 감성 장르입니다.",
        attributes: [8, 10, 1, 9, 6],
        tags: &["Retro", "80s", "Cyberpunk"],
        prompts: &[
            prompt(
                "80s synthwave, retro-futuristic, analog synths, driving beat",
                "80년대 미래주의 감성",
            ),
            prompt(
                "dreamy chillwave, hazy synths, nostalgic, slow tempo",
                "몽환적인 사운드",
            ),
            prompt(
                "outrun, neon nights, fast electronic drums, arpeggiated bass",
                "네온 사인을 가르는 드라이브",
            ),
            prompt(
                "dark synthwave, horror movie style, deep bass, aggressive synths",
                "어두운 복고풍 호러",
            ),
            prompt(
                "vaporwave style, chopped and screwed, elevator music remix",
                "기괴한 베이퍼웨이브",
            ),
            prompt(
                "synthwave disco, funky, dancing, 80s pop, bright",
                "밝은 신스 팝 디스코",
            ),
        ],
    },
    GenreRecord {
        id: 3,
        name: "Hard Rock",
        category: Category::Standard,
        description: "강력한 기타 리프와 파워풀한 드럼이 특징입니다.",
        attributes: [10, 2, 4, 5, 7],
        tags: &["Heavy", "Energy", "Riff"],
        prompts: &[
            prompt(
                "hard rock, heavy distorted guitar riffs, powerful drums",
                "클래식하고 강력한 리프",
            ),
            prompt(
                "modern hard rock, drop-D tuning, punchy production",
                "현대적인 사운드",
            ),
            prompt(
                "stadium rock, anthem, cheering crowd, soaring guitar solo",
                "웅장한 경기장 록",
            ),
            prompt(
                "blues rock, crunchy guitar, gravelly vocals, steady beat",
                "거친 보컬과 블루지한 기타",
            ),
            prompt(
                "70s hard rock, vintage tube amp sound, cowbell, driving bass",
                "빈티지한 70년대 록",
            ),
            prompt(
                "grunge style, raw energy, distorted, melancholic verses",
                "너바나 스타일의 그런지",
            ),
        ],
    },
    GenreRecord {
        id: 101,
        name: "K-Pop: Newjeans Style",
        category: Category::KPop,
        description: "뉴트로와 UK 개러지 비트가 섞인 미니멀한 팝입니다.",
        attributes: [6, 7, 4, 9, 5],
        tags: &["Newtro", "UK Garage", "Chill"],
        prompts: &[
            prompt(
                "k-pop, Newjeans style, UK garage beat, jersey club, nostalgic",
                "청량하고 미니멀한 이지리스닝",
            ),
            prompt(
                "y2k pop, 90s aesthetic, drum and bass lite, airy vocals",
                "Y2K 감성의 몽환적 댄스곡",
            ),
            prompt(
                "lo-fi kpop, soft synths, muted drums, teenage dream atmosphere",
                "나른하고 감성적인 하이틴 무드",
            ),
            prompt(
                "rhythmic k-pop, 2-step garage, clean production, catchy hook",
                "세련된 리듬감의 트렌디한 팝",
            ),
            prompt(
                "summer breeze kpop, light synth, acoustic guitar pluck, refreshing",
                "여름 바람처럼 시원한 곡",
            ),
            prompt(
                "minimalist kpop pop, deep house influence, chic, effortless",
                "절제된 미학의 시크한 스타일",
            ),
        ],
    },
    GenreRecord {
        id: 102,
        name: "K-Pop: Aespa Style",
        category: Category::KPop,
        description: "하이퍼팝과 메탈릭한 사운드의 SMP 스타일입니다.",
        attributes: [10, 10, 1, 6, 9],
        tags: &["Hyperpop", "Cyberpunk", "Powerful"],
        prompts: &[
            prompt(
                "k-pop, aespa style, aggressive synth, metallic texture, futuristic",
                "쇠맛 나는 강력한 하이퍼팝",
            ),
            prompt(
                "dark k-pop, glitchy edm, heavy distortion, dramatic bridge",
                "사이버네틱한 걸크러쉬 곡",
            ),
            prompt(
                "kwangya theme, cinematic electronic, mysterious intro, huge bass",
                "신비로운 광야 세계관 음악",
            ),
            prompt(
                "techno-pop kpop, hard hitting kicks, robotic vocal layers, intense",
                "기계적이고 강렬한 테크노 팝",
            ),
            prompt(
                "experimental kpop, complex structure, hyperpop elements",
                "실험적이고 에너지 넘치는 사운드",
            ),
            prompt(
                "virtual diva style, vocaloid influence, fast bpm, digital world",
                "디지털 감성 미래형 팝",
            ),
        ],
    },
    GenreRecord {
        id: 103,
        name: "K-Pop: IVE Style",
        category: Category::KPop,
        description: "우아하고 화려한 멜로디의 나르시시즘 팝입니다.",
        attributes: [8, 7, 3, 7, 7],
        tags: &["Elegant", "Royal", "Chic"],
        prompts: &[
            prompt(
                "k-pop, IVE style, elegant pop, classy strings, glamorous disco",
                "우아하고 화려한 공주풍 댄스",
            ),
            prompt(
                "majestic k-pop, royal aesthetic, chic vocals, clean production",
                "도도하고 세련된 틴프레시",
            ),
            prompt(
                "narcissistic pop, confident aura, catchy chorus, stylish",
                "자신감 넘치는 세련된 분위기",
            ),
            prompt(
                "romantic disco kpop, sparkly synths, funky bass, dreamy vocals",
                "반짝이는 신스와 디스코의 만남",
            ),
            prompt(
                "chic k-pop, rhythmic guitar, luxury vibe, high teen queen",
                "럭셔리하고 시크한 하이틴 퀸",
            ),
            prompt(
                "sophisticated dance kpop, string stabs, modern pop, graceful",
                "우아한 현악 댄스 팝",
            ),
        ],
    },
];
