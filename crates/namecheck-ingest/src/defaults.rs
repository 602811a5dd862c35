//! Master list compiled into the binary, used when no list file is given
//! or the given one cannot be trusted.

pub const DEFAULT_MASTER_NAMES: &[&str] = &[
    "(민간)부산미음동물류",
    "(CM)평택고덕10A",
    "(종평)안심뉴타운A",
    "(적격)서해선103역사",
    "(민간)안성CDC물류",
    "(민간)제주한화우주센터",
    "(민간)쿠팡김천물류",
    "(민간)전주대자인병원",
    "(BOT)고삼호수 휴게소",
    "(기본)이천호국원확충",
    "(종심)운정역환승주차장",
    "(BTL)춘천기계공고",
    "(BTL)춘천기계공고(봄내중)",
    "(적격)고양주차장전기",
    "(종심)의왕월암1A",
    "(종심)경산대임1A",
    "(종심)인천계양5A",
    "(종심)성남복정1A",
    "(적격)강원철도청사",
    "(민간)광주오포D물류",
    "(민간)고려대인문관",
    "(BTL)경북대시설개선",
    "(BOT)목감휴게소신축",
    "(종심)남양주 왕숙 A-2BL",
    "(턴키)세종 5-1생활권 L5",
    "(기본)킨텍스전시장",
    "(BTL)논산관사",
    "(BTL)충남대 세종캠퍼스",
    "(BTL)공주대 세종캠퍼스",
    "(민참.분양)부천역곡대장A",
    "(민참.분양)광명시흥A",
    "(실시)부산지방합동청사",
    "(민간)KT대전인재개발원(전기)",
    "(민간)KT대전인재개발원(소방)",
    "(턴키)광교공공지산건립",
    "(시행도급)대전죽동오피스텔",
    "(시행도급)천안백석지산",
    "(시행도급)속초조양동생숙",
    "(자체.시공)인천검단1BL",
    "(자체.시공)인천검단3BL",
    "(시행도급)성남복정3BL",
    "(자체.시공)창원명곡1BL",
    "(자체.시공)시흥거모3BL",
    "(민임)이천중리4BL",
    "(시행도급)천안 오룡경기장",
    "(자체.시공)이천부필리A물류",
    "(자체.시공)서울역삼오피스텔",
    "(시행도급)성남복정홍보관",
    "(자체.시행)인천검단1BL",
    "(자체.시행)인천검단3BL",
    "(자체.시행)창원명곡1BL",
    "(자체.시행)서울역삼오피스텔",
    "(자체.시행)이천부필리A물류",
    "(자체.공모)오산운암뜰",
    "(종평)청주공공하수",
    "(종심)창녕밀양5",
    "(순수내역)포승-평택 2공구",
    "(턴키)이천문경철도8",
    "(턴키)삼성동탄철도2",
    "(턴키)안성구리10",
    "(턴키)안성구리11",
    "(종심)안성용인5",
    "(턴키)안성구리14",
    "(턴키)진접복선전철1",
    "(턴키)별내선복선전철3",
    "(적격)미금역외승강설비",
    "(적격)평택이화공공하수",
    "(적격)화천사내하수관로",
    "(적격)화천사내상수병설",
    "(종심)현대ENF천연가스",
    "(적격)서산씨지앤대산천연가스",
    "(종평)연금금성도로",
    "(종평)판교 하수처리용량 증설",
    "(적격)원산도공공하수",
    "(턴키)부산북항배후도로",
    "(실시)새만금전주8",
    "(적격)구리갈매송전관로",
    "(종평)매리양산도로",
    "(종심)포항안동2도로",
    "(종심)월곶판교전철5",
    "(종심)중리천리1도로",
    "(종심)대청댐광역상수도2",
    "(종평)울산미포산단",
    "(종평)송도기반시설",
    "(적격)장흥기산천재해예방",
    "(적격)송도배전간선",
    "(종심)새만금지구 3공구",
    "(종심)과천지식정보타운역 노반신설",
    "(종심)춘천-속초(6공구)",
    "(종심)강릉-제진(7공구)",
    "(실시)동면-진천(2공구)",
    "(턴키)용담댐 안전성 강화",
    "(실시)함양창녕3",
    "(종심)함양창녕8",
    "(턴키)삼성동탄철도4",
    "(턴키)동탄인덕원전철9",
    "(턴키)광교호매실전철2",
    "(턴키)대전철도중정비",
    "(CM)성남복정단지조성",
    "(CM)구리갈매단지조성",
    "(CM)시흥거모단지조성",
    "(CM)남양주왕숙조성2",
    "(턴키)안동댐안전성강화",
    "(기본)영동대로2도로",
    "(턴키)강북정수장증설",
    "(적격)성남복정전력구",
    "(해외)인도네시아도수관로",
    "(적격)화성능동조경",
    "(적격)파주운정조경",
    "(적격)경기 지방정원 조성",
    "(자체.시공)이천부필리도로",
    "(자체)화성우정 산단",
    "(해외)캄보디아지방도",
    "(통합)21년 창원부산",
    "(통합)23년 대구순환",
    "(통합)24년 상주영천(추가)",
    "(도로)22년 서울외곽",
    "(도로)22년 대구부산",
    "(도로)23년 신공항HW",
    "(도로)16년 광주원주",
    "(영업)23년 평택시흥",
    "(영업)22년 서울문산",
    "(ITS)25년 대전충남",
    "(ITS)25년 전북",
    "(통합)22년 상주영천",
    "(통합)24년 덕송내각",
    "(통합)24년 창원부산",
    "(도로)25년 서울문산",
    "(통합)25년 대구순환",
    "(도로)25년 서울외곽",
    "(도로)25년 대구부산",
    "(통합)21년 서부간선",
    "(통합)18년 옥산오창",
    "(도전)22년 시흥지사TN",
    "(도운)22년 인제양양TN",
    "(도운)22년 육십령TN",
    "(도전)22년 군위지사TN",
    "(국운)22년 금산TN",
    "(지운)22년 용진TN",
    "(국운)22년 밤재TN",
    "(도전)23년 동서울지사TN",
    "(지운)25년 법기TN",
    "(도전)22년 춘천지사TN",
    "(도운)22년 재약산TN",
    "(도전)23년 홍천지사TN",
    "(도전)23년 인천지사TN",
    "(국운)23년 마산TN",
    "(민운)22년 서울춘천TN",
    "(국운)23년 멧둔재TN",
    "(국운)23년 마석TN",
    "(국운)23년 김해TN",
    "(지운)23년 경기남부TN",
    "(국운)24년 백마TN",
    "(국운)23년 진주권역TN",
    "(지운)24년 중원TN",
    "(지운)25년 안민TN",
    "(국운)24년 고덕TN",
    "(도운)24년 남한산성TN",
    "(국운)25년 금산TN",
    "(지운)25년 영월저류지",
    "(지운)25년 용진TN",
    "(국운)25년 밤재TN",
    "(도운)25년 육십령TN",
    "(도전)25년 구례지사TN",
    "(도전)25년 함평지사TN",
    "(도전)25년 청송지사TN",
    "(도전)25년 군위지사TN",
    "(도전)25년 화성지사TN",
    "(도운)25년 신불산TN",
    "(도전)25년 밀양지사TN",
    "(도전)25년 창원지사TN",
    "(도전)25년 진주지사TN",
    "(민운)25년 서울춘천TN",
];
