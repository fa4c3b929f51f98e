//! Tablas fijas a partir de las cuales se arman los productos de muestra

use crate::aliases::{Categoria, NombreBase, Peso, TablaCategorias};

/// Pesos de los envases, en el orden en que se ciclan
pub const PESOS: [Peso; 6] = ["80g", "120g", "200g", "350g", "500g", "1kg"];

pub const PRODUCTOS_SNACK: [NombreBase; 10] = [
    "사과 과일칩",
    "바나나 과일칩",
    "딸기 과일칩",
    "망고 과일칩",
    "배 과일칩",
    "고구마칩",
    "현미쌀과자",
    "유기농 과일퓨레",
    "아이용 동결건조 과일",
    "무첨가 과일스틱",
];

/// Categoria de los snacks con id impar
pub const CATEGORIA_SNACK_IMPAR: Categoria = "과일/간식";
/// Categoria de los snacks con id par
pub const CATEGORIA_SNACK_PAR: Categoria = "유아식/아이간식";

/// Productos del resto de las categorias. El orden de las categorias es
/// el orden en que se reparten los ids.
pub const PRODUCTOS_OTRAS_CATEGORIAS: TablaCategorias = [
    (
        "수산물",
        ["손질고등어", "훈제연어", "새우살", "오징어채", "명란젓"],
    ),
    (
        "정육/가공육",
        ["닭가슴살", "불고기", "돈까스", "훈제오리", "한입스테이크"],
    ),
    (
        "밀키트",
        [
            "된장찌개 밀키트",
            "부대찌개 밀키트",
            "파스타 밀키트",
            "샤브샤브 밀키트",
            "감바스 밀키트",
        ],
    ),
    (
        "건강식품",
        ["프로틴바", "오트밀", "저당쿠키", "곤약젤리", "단백질쉐이크"],
    ),
    (
        "비건식품",
        ["비건 만두", "비건 패티", "두부스테이크", "귀리음료", "식물성 요거트"],
    ),
];
