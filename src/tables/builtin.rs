//! Built-in reference data compiled into the binary.

use crate::pill::{Color, Shape};

/// Korean and alias queries mapped to English search terms.
pub(crate) const SYNONYMS: &[(&str, &str)] = &[
    ("타이레놀", "acetaminophen"),
    ("아세트아미노펜", "acetaminophen"),
    ("판콜", "acetaminophen chlorpheniramine"),
    ("게보린", "acetaminophen caffeine"),
    ("이부프로펜", "ibuprofen"),
    ("부루펜", "ibuprofen"),
    ("애드빌", "ibuprofen"),
    ("아스피린", "aspirin"),
    ("나프록센", "naproxen"),
    ("탁센", "naproxen"),
    ("와파린", "warfarin"),
    ("쿠마딘", "warfarin"),
    ("메트포르민", "metformin"),
    ("다이아벡스", "metformin"),
    ("리피토", "atorvastatin"),
    ("아토르바스타틴", "atorvastatin"),
    ("심바스타틴", "simvastatin"),
    ("오메프라졸", "omeprazole"),
    ("로사르탄", "losartan"),
    ("암로디핀", "amlodipine"),
    ("노바스크", "amlodipine"),
    ("아목시실린", "amoxicillin"),
    ("세팔렉신", "cephalexin"),
    ("클라리스로마이신", "clarithromycin"),
    ("지르텍", "cetirizine"),
    ("세티리진", "cetirizine"),
    ("클라리틴", "loratadine"),
    ("로라타딘", "loratadine"),
    ("졸피뎀", "zolpidem"),
    ("스틸녹스", "zolpidem"),
    ("서트랄린", "sertraline"),
    ("졸로푸트", "sertraline"),
    ("플루옥세틴", "fluoxetine"),
    ("프로작", "fluoxetine"),
    ("레보티록신", "levothyroxine"),
    ("씬지로이드", "levothyroxine"),
    ("비아그라", "sildenafil"),
    ("실데나필", "sildenafil"),
    ("니트로글리세린", "nitroglycerin"),
    ("진통제", "acetaminophen ibuprofen naproxen"),
    ("소염진통제", "ibuprofen naproxen"),
];

/// Drug names and the drugs they are known to interact with.
pub(crate) const INTERACTIONS: &[(&str, &[&str])] = &[
    (
        "warfarin",
        &[
            "aspirin",
            "ibuprofen",
            "naproxen",
            "clarithromycin",
            "omeprazole",
            "acetaminophen",
            "fluoxetine",
            "sertraline",
        ],
    ),
    ("와파린", &["아스피린", "이부프로펜", "나프록센", "클라리스로마이신"]),
    ("aspirin", &["warfarin", "ibuprofen", "naproxen", "sertraline", "fluoxetine"]),
    ("아스피린", &["와파린", "이부프로펜", "나프록센"]),
    ("ibuprofen", &["aspirin", "warfarin", "losartan", "sertraline"]),
    ("이부프로펜", &["아스피린", "와파린", "로사르탄"]),
    ("naproxen", &["aspirin", "warfarin", "losartan"]),
    ("metformin", &["alcohol", "contrast"]),
    ("simvastatin", &["clarithromycin", "amlodipine", "grapefruit"]),
    ("atorvastatin", &["clarithromycin", "grapefruit"]),
    ("sildenafil", &["nitroglycerin", "isosorbide"]),
    ("비아그라", &["니트로글리세린"]),
    ("fluoxetine", &["tramadol", "sertraline", "zolpidem"]),
    ("sertraline", &["tramadol", "fluoxetine"]),
    ("levothyroxine", &["omeprazole", "calcium", "iron"]),
    ("zolpidem", &["alcohol", "fluoxetine"]),
    ("losartan", &["potassium", "spironolactone"]),
];

/// Allergy classes and ingredient fragments that belong to them.
pub(crate) const ALLERGY_GROUPS: &[(&str, &[&str])] = &[
    (
        "페니실린",
        &[
            "페니실린",
            "아목시실린",
            "암피실린",
            "penicillin",
            "amoxicillin",
            "ampicillin",
            "augmentin",
            "오구멘틴",
        ],
    ),
    (
        "설폰아마이드",
        &[
            "설폰아마이드",
            "설파메톡사졸",
            "sulfamethoxazole",
            "sulfonamide",
            "bactrim",
            "박트림",
        ],
    ),
    (
        "아스피린",
        &["아스피린", "aspirin", "salicylate", "아세틸살리실산", "acetylsalicylic"],
    ),
    (
        "세팔로스포린",
        &[
            "세팔로스포린",
            "세팔렉신",
            "세프트리악손",
            "cephalexin",
            "ceftriaxone",
            "cefuroxime",
            "cephalosporin",
        ],
    ),
];

type PillRow = (&'static str, &'static str, &'static str, Shape, Color, &'static str);

/// Pill appearance catalog: name, ingredient, strength, shape, color, imprint.
pub(crate) const PILLS: &[PillRow] = &[
    ("타이레놀정 500mg", "아세트아미노펜", "500mg", Shape::Oval, Color::White, "TYLENOL"),
    ("타이레놀 8시간 이알서방정", "아세트아미노펜", "650mg", Shape::Oval, Color::White, "TY 650"),
    ("Acetaminophen 500mg", "acetaminophen", "500mg", Shape::Round, Color::White, "L484"),
    ("Ibuprofen 200mg", "ibuprofen", "200mg", Shape::Round, Color::Brown, "I-2"),
    ("부루펜정 400mg", "이부프로펜", "400mg", Shape::Round, Color::Pink, "IBU 400"),
    ("Aspirin 81mg", "aspirin", "81mg", Shape::Round, Color::Orange, "81"),
    ("아스피린프로텍트정 100mg", "아스피린", "100mg", Shape::Round, Color::White, "BA 100"),
    ("Warfarin 5mg", "warfarin", "5mg", Shape::Round, Color::Pink, "TV 5"),
    ("Metformin 500mg", "metformin", "500mg", Shape::Round, Color::White, "G 45"),
    ("다이아벡스정 500mg", "메트포르민", "500mg", Shape::Oval, Color::White, "DW 500"),
    ("Atorvastatin 20mg", "atorvastatin", "20mg", Shape::Oval, Color::White, "PD 156"),
    ("Simvastatin 20mg", "simvastatin", "20mg", Shape::Round, Color::Brown, "M S2"),
    ("Amlodipine 5mg", "amlodipine", "5mg", Shape::Octagon, Color::White, "NORVASC 5"),
    ("Losartan 50mg", "losartan", "50mg", Shape::Oval, Color::Green, "MRK 952"),
    ("Omeprazole 20mg", "omeprazole", "20mg", Shape::Capsule, Color::Pink, "OMP 20"),
    ("Amoxicillin 500mg", "amoxicillin", "500mg", Shape::Capsule, Color::Red, "AMOX 500"),
    ("Cephalexin 500mg", "cephalexin", "500mg", Shape::Capsule, Color::Green, "TEVA 3147"),
    ("Cetirizine 10mg", "cetirizine", "10mg", Shape::Rectangle, Color::White, "ZYRTEC 10"),
    ("Loratadine 10mg", "loratadine", "10mg", Shape::Oval, Color::White, "L612"),
    ("Zolpidem 10mg", "zolpidem", "10mg", Shape::Oval, Color::White, "ZOLPIDEM 10"),
    ("Sertraline 50mg", "sertraline", "50mg", Shape::Oval, Color::Blue, "ZOLOFT 50"),
    ("Fluoxetine 20mg", "fluoxetine", "20mg", Shape::Capsule, Color::Green, "PROZAC 20"),
    ("Levothyroxine 50mcg", "levothyroxine", "50mcg", Shape::Oval, Color::White, "GG 331"),
    ("Sildenafil 100mg", "sildenafil", "100mg", Shape::Diamond, Color::Blue, "VGR 100"),
    ("Nitroglycerin 0.4mg", "nitroglycerin", "0.4mg", Shape::Round, Color::White, "N"),
    ("Clarithromycin 500mg", "clarithromycin", "500mg", Shape::Oval, Color::Yellow, "KT"),
    ("Naproxen 500mg", "naproxen", "500mg", Shape::Oval, Color::Gray, "NPR 500"),
    ("Tramadol 50mg", "tramadol", "50mg", Shape::Capsule, Color::White, "377"),
    ("Spironolactone 25mg", "spironolactone", "25mg", Shape::Hexagon, Color::Yellow, "SY 25"),
    ("Ondansetron 4mg", "ondansetron", "4mg", Shape::Triangle, Color::White, "ZF 4"),
];
