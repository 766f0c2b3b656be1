//! Built-in alias and unit tables
//!
//! Within a category, items whose Japanese or Latin names embed another
//! item's alias (e.g. `平均赤血球容積` embeds `赤血球`) are listed before that
//! item so the line scan resolves them first.

use super::{CategoryTable, ItemSpec};
use crate::types::Category;

macro_rules! item {
    ($id:literal, $unit:literal, [$($alias:literal),+ $(,)?]) => {
        ItemSpec {
            id: $id,
            unit: $unit,
            aliases: &[$($alias),+],
            signed: false,
        }
    };
}

const PROTEINS: &[ItemSpec] = &[
    item!("TP", "g/dL", ["TP", "総蛋白", "総タンパク", "総たんぱく", "血清総蛋白", "ＴＰ", "T-P", "Total Protein", "soutanpaku"]),
    item!("A/G", "", ["A/G", "A/G比", "Ａ/Ｇ", "Ａ／Ｇ比", "AG比", "アルブミン/グロブリン比"]),
    item!("Alb", "g/dL", ["Alb", "ALB", "アルブミン", "血清アルブミン", "Ａｌｂ", "ＡＬＢ", "Albumin"]),
];

const RENAL: &[ItemSpec] = &[
    item!("BUN", "mg/dL", ["BUN", "UN", "尿素窒素", "血清尿素窒素", "ＢＵＮ", "Urea Nitrogen"]),
    item!("CCr", "mL/min", ["CCr", "Ccr", "クレアチニンクリアランス"]),
    item!("Cre", "mg/dL", ["Cre", "CRE", "Cr", "CREA", "クレアチニン", "血清クレアチニン", "ＣＲＥ", "Ｃｒｅ", "Creatinine", "kureachinin"]),
    item!("eGFR", "mL/min/1.73m²", ["eGFR", "ｅＧＦＲ", "eGFRcreat", "推算GFR", "推定糸球体濾過量"]),
    item!("UA", "mg/dL", ["UA", "尿酸", "血清尿酸", "ＵＡ", "Uric Acid"]),
    item!("CysC", "mg/L", ["CysC", "Cys-C", "シスタチンC", "シスタチンＣ"]),
    item!("β2MG", "mg/L", ["β2MG", "β2-MG", "β2ミクログロブリン", "β2-ミクログロブリン", "B2MG"]),
];

const HEPATIC: &[ItemSpec] = &[
    item!("AST", "U/L", ["AST", "GOT", "AST(GOT)", "AST（GOT）", "ＡＳＴ", "ＧＯＴ", "SGOT", "アスパラギン酸アミノトランスフェラーゼ"]),
    item!("ALT", "U/L", ["ALT", "GPT", "ALT(GPT)", "ALT（GPT）", "ＡＬＴ", "ＧＰＴ", "SGPT", "アラニンアミノトランスフェラーゼ"]),
    item!("LDH", "U/L", ["LDH", "LD", "LDH(IFCC)", "LD(IFCC)", "乳酸脱水素酵素", "ＬＤＨ"]),
    item!("ALP", "U/L", ["ALP", "ALP(IFCC)", "ALP(JSCC)", "アルカリホスファターゼ", "ＡＬＰ"]),
    item!("γ-GTP", "U/L", ["γ-GTP", "γGTP", "γ-GT", "γ－GTP", "γ‐GTP", "ｒ-GTP", "r-GTP", "Y-GTP", "GGT", "ガンマGTP", "γ－ＧＴＰ"]),
    item!("T-Bil", "mg/dL", ["T-Bil", "T-BIL", "T-bil", "TBil", "T.Bil", "総ビリルビン", "Ｔ－Ｂｉｌ"]),
    item!("D-Bil", "mg/dL", ["D-Bil", "D-BIL", "D-bil", "DBil", "D.Bil", "直接ビリルビン", "直接型ビリルビン", "Ｄ－Ｂｉｌ"]),
    item!("I-Bil", "mg/dL", ["I-Bil", "I-BIL", "間接ビリルビン", "間接型ビリルビン"]),
    item!("ChE", "U/L", ["ChE", "CHE", "コリンエステラーゼ", "ＣｈＥ"]),
    item!("LAP", "U/L", ["LAP", "ロイシンアミノペプチダーゼ"]),
    item!("NH3", "μg/dL", ["NH3", "NH₃", "アンモニア", "血中アンモニア"]),
    item!("AMY", "U/L", ["AMY", "Amy", "アミラーゼ", "血清アミラーゼ"]),
    item!("Lipase", "U/L", ["Lipase", "LIP", "リパーゼ"]),
];

const ELECTROLYTES: &[ItemSpec] = &[
    item!("Na", "mEq/L", ["Na", "ナトリウム", "Ｎａ", "Sodium"]),
    item!("K", "mEq/L", ["K", "カリウム", "Ｋ", "Potassium"]),
    item!("Cl", "mEq/L", ["Cl", "CL", "クロール", "クロライド", "Ｃｌ", "Chloride"]),
    item!("cCa", "mg/dL", ["補正Ca", "補正カルシウム", "補正Ｃａ"]),
    item!("Ca", "mg/dL", ["Ca", "カルシウム", "Ｃａ", "Calcium"]),
    item!("IP", "mg/dL", ["IP", "iP", "P", "無機リン", "Ｐ", "無機リン(P)"]),
    item!("Mg", "mg/dL", ["Mg", "マグネシウム", "Ｍｇ"]),
    item!("TIBC", "μg/dL", ["TIBC", "総鉄結合能"]),
    item!("UIBC", "μg/dL", ["UIBC", "不飽和鉄結合能"]),
    item!("Fe", "μg/dL", ["Fe", "血清鉄", "Ｆｅ"]),
    item!("Zn", "μg/dL", ["Zn", "亜鉛", "血清亜鉛"]),
];

const HEMATOLOGY: &[ItemSpec] = &[
    item!("ESR", "mm/h", ["ESR", "血沈", "赤沈", "赤血球沈降速度"]),
    item!("MCV", "fL", ["MCV", "平均赤血球容積", "ＭＣＶ"]),
    item!("MCHC", "%", ["MCHC", "平均赤血球ヘモグロビン濃度", "ＭＣＨＣ"]),
    item!("MCH", "pg", ["MCH", "平均赤血球ヘモグロビン量", "ＭＣＨ"]),
    item!("RDW", "%", ["RDW", "RDW-CV", "赤血球分布幅"]),
    item!("Ret", "‰", ["Ret", "RET", "Retic", "網状赤血球", "網赤血球"]),
    item!("WBC", "/μL", ["WBC", "白血球", "白血球数", "ＷＢＣ", "Leukocytes", "hakkekkyu"]),
    item!("RBC", "×10⁴/μL", ["RBC", "赤血球", "赤血球数", "ＲＢＣ", "Erythrocytes", "sekkekkyu"]),
    item!("Hb", "g/dL", ["Hb", "HGB", "Hgb", "ヘモグロビン", "血色素量", "血色素", "Ｈｂ", "Hemoglobin"]),
    item!("Ht", "%", ["Ht", "Hct", "HCT", "ヘマトクリット", "Ｈｔ", "Hematocrit"]),
    item!("PLT", "×10⁴/μL", ["PLT", "Plt", "血小板", "血小板数", "ＰＬＴ", "Platelets", "kesshoban"]),
];

const DIFFERENTIAL: &[ItemSpec] = &[
    item!("Stab", "%", ["Stab", "桿状核球", "桿状核好中球"]),
    item!("Seg", "%", ["Seg", "分葉核球", "分葉核好中球"]),
    item!("Neut", "%", ["Neut", "NEUT", "Neutro", "Neu", "好中球", "Neutrophils", "Neutrophil"]),
    item!("Aty-Ly", "%", ["Aty-Ly", "Atyp", "異型リンパ球"]),
    item!("Lymph", "%", ["Lymph", "LYMPH", "Lymp", "Lym", "リンパ球", "Lymphocytes", "Lymphocyte"]),
    item!("Mono", "%", ["Mono", "MONO", "単球", "Monocytes", "Monocyte"]),
    item!("Eos", "%", ["Eos", "EOS", "Eosino", "好酸球", "Eosinophils", "Eosinophil"]),
    item!("Baso", "%", ["Baso", "BASO", "好塩基球", "Basophils", "Basophil"]),
];

const INFLAMMATION: &[ItemSpec] = &[
    item!("hs-CRP", "mg/dL", ["hs-CRP", "hsCRP", "高感度CRP", "高感度ＣＲＰ"]),
    item!("CRP", "mg/dL", ["CRP", "CRP定量", "C反応性蛋白", "C反応性タンパク", "ＣＲＰ", "C-reactive protein"]),
    item!("PCT", "ng/mL", ["PCT", "プロカルシトニン", "Procalcitonin"]),
    item!("SAA", "μg/mL", ["SAA", "血清アミロイドA", "アミロイドA"]),
    item!("Presepsin", "pg/mL", ["Presepsin", "プレセプシン", "P-SEP"]),
];

const COAGULATION: &[ItemSpec] = &[
    item!("PT-INR", "", ["PT-INR", "INR", "PT(INR)", "PT-INR値", "ＰＴ－ＩＮＲ"]),
    item!("PT%", "%", ["PT%", "PT活性", "プロトロンビン活性"]),
    item!("PT", "秒", ["PT", "プロトロンビン時間", "ＰＴ"]),
    item!("APTT", "秒", ["APTT", "aPTT", "活性化部分トロンボプラスチン時間", "ＡＰＴＴ"]),
    item!("FDP", "μg/mL", ["FDP", "フィブリン分解産物", "フィブリン・フィブリノゲン分解産物"]),
    item!("Fib", "mg/dL", ["Fib", "FIB", "Fbg", "フィブリノゲン", "フィブリノーゲン"]),
    item!("D-dimer", "μg/mL", ["D-dimer", "D-Dimer", "DD", "Dダイマー", "D-ダイマー", "Ｄダイマー"]),
    item!("TAT", "ng/mL", ["TAT", "トロンビン・アンチトロンビン複合体"]),
    item!("AT-III", "%", ["AT-III", "ATIII", "AT3", "ATⅢ", "アンチトロンビン", "アンチトロンビンIII"]),
];

const GLUCOSE: &[ItemSpec] = &[
    item!("HbA1c", "%", ["HbA1c", "HbA1C", "HbA1c(NGSP)", "ヘモグロビンA1c", "ＨｂＡ１ｃ", "A1c"]),
    item!("Glu", "mg/dL", ["Glu", "GLU", "血糖", "血糖値", "空腹時血糖", "グルコース", "BS", "FBS", "Glucose"]),
    item!("IRI", "μU/mL", ["IRI", "インスリン", "インスリン値", "Insulin"]),
    item!("CPR", "ng/mL", ["CPR", "Cペプチド", "C-ペプチド", "C-peptide"]),
    item!("1,5-AG", "μg/mL", ["1,5-AG", "1,5AG", "1.5AG"]),
];

const LIPIDS: &[ItemSpec] = &[
    item!("T-Cho", "mg/dL", ["T-Cho", "T-CHO", "TC", "TCHO", "Tcho", "T-chol", "総コレステロール"]),
    item!("non-HDL-C", "mg/dL", ["non-HDL-C", "nonHDL-C", "non-HDLコレステロール"]),
    item!("LDL-C", "mg/dL", ["LDL-C", "LDL", "LDL-Cho", "LDL-CHO", "LDLコレステロール"]),
    item!("HDL-C", "mg/dL", ["HDL-C", "HDL", "HDL-Cho", "HDL-CHO", "HDLコレステロール"]),
    item!("TG", "mg/dL", ["TG", "中性脂肪", "トリグリセリド", "トリグリセライド"]),
    item!("Lp(a)", "mg/dL", ["Lp(a)", "リポ蛋白(a)"]),
];

const CARDIAC: &[ItemSpec] = &[
    item!("NT-proBNP", "pg/mL", ["NT-proBNP", "NTproBNP", "NT-pro BNP"]),
    item!("BNP", "pg/mL", ["BNP", "ＢＮＰ"]),
    item!("TnT", "ng/mL", ["TnT", "cTnT", "hs-TnT", "トロポニンT", "高感度トロポニンT"]),
    item!("TnI", "pg/mL", ["TnI", "cTnI", "hs-TnI", "トロポニンI", "高感度トロポニンI"]),
    item!("CK-MB", "ng/mL", ["CK-MB", "CKMB"]),
];

const THYROID: &[ItemSpec] = &[
    item!("TRAb", "IU/L", ["TRAb", "TSHレセプター抗体", "TSH受容体抗体"]),
    item!("TSH", "μIU/mL", ["TSH", "甲状腺刺激ホルモン", "ＴＳＨ"]),
    item!("FT4", "ng/dL", ["FT4", "F-T4", "fT4", "遊離T4", "遊離サイロキシン", "ＦＴ４"]),
    item!("FT3", "pg/mL", ["FT3", "F-T3", "fT3", "遊離T3", "遊離トリヨードサイロニン", "ＦＴ３"]),
    item!("TgAb", "IU/mL", ["TgAb", "抗Tg抗体", "抗サイログロブリン抗体"]),
    item!("TPOAb", "IU/mL", ["TPOAb", "抗TPO抗体", "抗甲状腺ペルオキシダーゼ抗体"]),
];

const TUMOR_MARKERS: &[ItemSpec] = &[
    item!("CEA", "ng/mL", ["CEA", "癌胎児性抗原", "ＣＥＡ"]),
    item!("AFP", "ng/mL", ["AFP", "α-FP", "α-フェトプロテイン", "αフェトプロテイン", "ＡＦＰ"]),
    item!("CA19-9", "U/mL", ["CA19-9", "CA19－9", "CA 19-9", "ＣＡ１９－９"]),
    item!("CA125", "U/mL", ["CA125", "CA-125", "CA 125"]),
    item!("CA15-3", "U/mL", ["CA15-3", "CA 15-3"]),
    item!("PSA", "ng/mL", ["PSA", "前立腺特異抗原", "ＰＳＡ"]),
    item!("SCC", "ng/mL", ["SCC", "SCC抗原", "扁平上皮癌関連抗原"]),
    item!("CYFRA", "ng/mL", ["CYFRA", "CYFRA21-1", "シフラ", "サイトケラチン19フラグメント"]),
    item!("NSE", "ng/mL", ["NSE", "神経特異エノラーゼ"]),
    item!("ProGRP", "pg/mL", ["ProGRP", "Pro-GRP", "ガストリン放出ペプチド前駆体"]),
    item!("sIL-2R", "U/mL", ["sIL-2R", "sIL2R", "可溶性IL-2レセプター", "可溶性インターロイキン2受容体"]),
    item!("PIVKA-II", "mAU/mL", ["PIVKA-II", "PIVKA-Ⅱ", "PIVKA2", "DCP"]),
];

const MISC: &[ItemSpec] = &[
    item!("Ferritin", "ng/mL", ["Ferritin", "FER", "フェリチン"]),
    item!("VitB12", "pg/mL", ["VitB12", "ビタミンB12", "B12"]),
    item!("Folate", "ng/mL", ["Folate", "葉酸"]),
    item!("IgG4", "mg/dL", ["IgG4", "ＩｇＧ４"]),
    item!("IgG", "mg/dL", ["IgG", "免疫グロブリンG", "ＩｇＧ"]),
    item!("IgA", "mg/dL", ["IgA", "免疫グロブリンA", "ＩｇＡ"]),
    item!("IgM", "mg/dL", ["IgM", "免疫グロブリンM", "ＩｇＭ"]),
    item!("IgE", "IU/mL", ["IgE", "非特異的IgE", "RIST", "ＩｇＥ"]),
    item!("C3", "mg/dL", ["C3", "補体C3"]),
    item!("C4", "mg/dL", ["C4", "補体C4"]),
    item!("CH50", "U/mL", ["CH50", "血清補体価"]),
    item!("KL-6", "U/mL", ["KL-6", "KL6", "ＫＬ－６"]),
    item!("SP-D", "ng/mL", ["SP-D", "サーファクタントプロテインD"]),
    item!("β-D-glucan", "pg/mL", ["β-Dグルカン", "βDグルカン", "β-D-グルカン", "β-D-glucan"]),
    item!("ACTH", "pg/mL", ["ACTH", "副腎皮質刺激ホルモン"]),
    item!("Cortisol", "μg/dL", ["Cortisol", "コルチゾール", "コルチゾル"]),
];

const CSF: &[ItemSpec] = &[
    item!("CSF-Cell", "/μL", ["髄液細胞数", "CSF細胞数", "CSF cell"]),
    item!("CSF-Protein", "mg/dL", ["髄液蛋白", "髄液タンパク", "CSF蛋白", "CSFタンパク"]),
    item!("CSF-Glucose", "mg/dL", ["髄液糖", "CSF糖"]),
    item!("MBP", "pg/mL", ["MBP", "ミエリン塩基性蛋白"]),
];

const AUTOANTIBODIES: &[ItemSpec] = &[
    item!("ANA", "倍", ["ANA", "抗核抗体", "ＡＮＡ"]),
    item!("RF", "IU/mL", ["RF", "リウマトイド因子", "リウマチ因子", "RA因子"]),
    item!("ACPA", "U/mL", ["ACPA", "抗CCP抗体", "抗ＣＣＰ抗体"]),
    item!("dsDNA", "IU/mL", ["dsDNA", "抗dsDNA抗体", "抗ds-DNA抗体", "anti-dsDNA"]),
    item!("SS-A", "U/mL", ["SS-A", "抗SS-A抗体", "抗Ro抗体"]),
    item!("SS-B", "U/mL", ["SS-B", "抗SS-B抗体", "抗La抗体"]),
    item!("MPO-ANCA", "U/mL", ["MPO-ANCA", "P-ANCA", "MPO ANCA"]),
    item!("PR3-ANCA", "U/mL", ["PR3-ANCA", "C-ANCA", "PR3 ANCA"]),
    item!("AChR-Ab", "nmol/L", ["AChR抗体", "抗AChR抗体", "抗アセチルコリン受容体抗体"]),
    item!("AQP4-Ab", "U/mL", ["AQP4抗体", "抗AQP4抗体", "抗アクアポリン4抗体"]),
    item!("MOG-Ab", "", ["MOG抗体", "抗MOG抗体"]),
    item!("GQ1b-Ab", "", ["GQ1b抗体", "抗GQ1b抗体"]),
];

const CYTOKINES: &[ItemSpec] = &[
    item!("IL-6", "pg/mL", ["IL-6", "IL6", "インターロイキン6", "インターロイキン-6"]),
    item!("IL-1β", "pg/mL", ["IL-1β", "IL1β", "IL-1b", "インターロイキン1β"]),
    item!("IL-8", "pg/mL", ["IL-8", "IL8", "インターロイキン8"]),
    item!("IL-10", "pg/mL", ["IL-10", "IL10", "インターロイキン10"]),
    item!("TNF-α", "pg/mL", ["TNF-α", "TNFα", "TNF-a", "腫瘍壊死因子α"]),
    item!("IFN-γ", "pg/mL", ["IFN-γ", "IFNγ", "インターフェロンγ"]),
];

const NEURO_MARKERS: &[ItemSpec] = &[
    item!("NfL", "pg/mL", ["NfL", "NFL", "Nf-L", "ニューロフィラメント軽鎖"]),
    item!("t-tau", "pg/mL", ["t-tau", "T-tau", "総タウ", "総タウ蛋白"]),
    item!("p-tau", "pg/mL", ["p-tau", "P-tau", "p-tau181", "リン酸化タウ"]),
    item!("Aβ42/40", "", ["Aβ42/40", "Aβ42/40比"]),
    item!("Aβ42", "pg/mL", ["Aβ42", "Aβ1-42", "Abeta42", "アミロイドβ42"]),
    item!("Aβ40", "pg/mL", ["Aβ40", "Aβ1-40", "Abeta40", "アミロイドβ40"]),
    item!("14-3-3", "μg/mL", ["14-3-3", "14-3-3蛋白", "14-3-3タンパク"]),
    item!("GFAP", "pg/mL", ["GFAP", "グリア線維性酸性蛋白"]),
];

const MUSCLE: &[ItemSpec] = &[
    item!("CK", "U/L", ["CK", "CPK", "クレアチンキナーゼ", "クレアチンホスホキナーゼ", "ＣＫ"]),
    item!("Aldolase", "U/L", ["Aldolase", "ALD", "アルドラーゼ"]),
    item!("Mb", "ng/mL", ["Mb", "Myoglobin", "ミオグロビン"]),
];

const LACTATE_PYRUVATE: &[ItemSpec] = &[
    item!("L/P", "", ["L/P比", "L/P", "乳酸/ピルビン酸比"]),
    item!("Lac", "mg/dL", ["Lac", "乳酸", "Lactate"]),
    item!("Pyr", "mg/dL", ["Pyr", "ピルビン酸", "Pyruvate"]),
];

const BLOOD_GAS: &[ItemSpec] = &[
    item!("pH", "", ["pH", "ｐＨ"]),
    item!("PaCO2", "mmHg", ["PaCO2", "PaCO₂", "pCO2", "PCO2", "動脈血二酸化炭素分圧"]),
    item!("PaO2", "mmHg", ["PaO2", "PaO₂", "pO2", "PO2", "動脈血酸素分圧"]),
    item!("HCO3", "mEq/L", ["HCO3", "HCO3-", "HCO₃⁻", "重炭酸", "重炭酸イオン"]),
    ItemSpec {
        id: "BE",
        unit: "mEq/L",
        aliases: &["BE", "B.E.", "ABE", "SBE", "Base Excess", "ベースエクセス", "塩基過剰"],
        signed: true,
    },
    item!("SaO2", "%", ["SaO2", "SaO₂", "sO2", "SO2", "酸素飽和度"]),
    item!("AG", "mEq/L", ["AG", "アニオンギャップ", "Anion Gap"]),
];

const URINALYSIS: &[ItemSpec] = &[
    item!("U-SG", "", ["U-SG", "SG", "尿比重", "比重"]),
    item!("U-pH", "", ["U-pH", "尿pH"]),
    item!("U-Pro", "mg/dL", ["U-Pro", "尿蛋白", "尿タンパク", "尿蛋白定量"]),
    item!("U-Glu", "mg/dL", ["尿糖", "尿グルコース"]),
    item!("U-Alb", "mg/gCr", ["UACR", "尿中アルブミン", "尿アルブミン"]),
    item!("U-Cre", "mg/dL", ["UCr", "UCRE", "尿中クレアチニン", "尿クレアチニン"]),
    item!("U-NAG", "U/L", ["NAG", "尿中NAG"]),
    item!("U-β2MG", "μg/L", ["尿中β2MG", "尿中β2ミクログロブリン"]),
    item!("U-Na", "mEq/L", ["尿中Na", "尿中ナトリウム"]),
    item!("U-RBC", "/HPF", ["尿中赤血球", "尿沈渣赤血球"]),
    item!("U-WBC", "/HPF", ["尿中白血球", "尿沈渣白血球"]),
    item!("U-Osm", "mOsm/kg", ["U-Osm", "尿浸透圧"]),
];

/// The built-in dictionary, one table per category
pub(crate) const STANDARD_TABLES: &[CategoryTable] = &[
    CategoryTable { category: Category::Proteins, items: PROTEINS },
    CategoryTable { category: Category::Renal, items: RENAL },
    CategoryTable { category: Category::Hepatic, items: HEPATIC },
    CategoryTable { category: Category::Electrolytes, items: ELECTROLYTES },
    CategoryTable { category: Category::Hematology, items: HEMATOLOGY },
    CategoryTable { category: Category::Differential, items: DIFFERENTIAL },
    CategoryTable { category: Category::Inflammation, items: INFLAMMATION },
    CategoryTable { category: Category::Coagulation, items: COAGULATION },
    CategoryTable { category: Category::Glucose, items: GLUCOSE },
    CategoryTable { category: Category::Lipids, items: LIPIDS },
    CategoryTable { category: Category::Cardiac, items: CARDIAC },
    CategoryTable { category: Category::Thyroid, items: THYROID },
    CategoryTable { category: Category::TumorMarkers, items: TUMOR_MARKERS },
    CategoryTable { category: Category::Misc, items: MISC },
    CategoryTable { category: Category::Csf, items: CSF },
    CategoryTable { category: Category::Autoantibodies, items: AUTOANTIBODIES },
    CategoryTable { category: Category::Cytokines, items: CYTOKINES },
    CategoryTable { category: Category::NeuroMarkers, items: NEURO_MARKERS },
    CategoryTable { category: Category::Muscle, items: MUSCLE },
    CategoryTable { category: Category::LactatePyruvate, items: LACTATE_PYRUVATE },
    CategoryTable { category: Category::BloodGas, items: BLOOD_GAS },
    CategoryTable { category: Category::Urinalysis, items: URINALYSIS },
];
