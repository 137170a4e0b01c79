//! Preset geometry kinds (`ST_ShapeType`).
use std::fmt;

use phf::phf_map;

macro_rules! preset_shapes {
    ($($(#[$doc:meta])* $variant:ident => $token:tt,)+) => {
        /// Built-in autoshape outline referenced by `<a:prstGeom prst="..."/>`.
        ///
        /// Corresponds to the VBA `MsoAutoShapeType` enumeration.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AutoShapeType {
            $($(#[$doc])* $variant,)+
        }

        static BY_TOKEN: phf::Map<&'static str, AutoShapeType> = phf_map! {
            $($token => AutoShapeType::$variant,)+
        };

        impl AutoShapeType {
            /// Every preset, in schema order.
            pub const ALL: &'static [AutoShapeType] = &[$(AutoShapeType::$variant,)+];

            /// XML token used in the `prst` attribute.
            #[inline]
            pub const fn to_xml(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

preset_shapes! {
    Line => "line",
    LineInverse => "lineInv",
    IsoscelesTriangle => "triangle",
    RightTriangle => "rtTriangle",
    Rectangle => "rect",
    Diamond => "diamond",
    Parallelogram => "parallelogram",
    Trapezoid => "trapezoid",
    NonIsoscelesTrapezoid => "nonIsoscelesTrapezoid",
    RegularPentagon => "pentagon",
    Hexagon => "hexagon",
    Heptagon => "heptagon",
    Octagon => "octagon",
    Decagon => "decagon",
    Dodecagon => "dodecagon",
    Star4Point => "star4",
    Star5Point => "star5",
    Star6Point => "star6",
    Star7Point => "star7",
    Star8Point => "star8",
    Star10Point => "star10",
    Star12Point => "star12",
    Star16Point => "star16",
    Star24Point => "star24",
    Star32Point => "star32",
    RoundedRectangle => "roundRect",
    Round1Rectangle => "round1Rect",
    Round2SameRectangle => "round2SameRect",
    Round2DiagRectangle => "round2DiagRect",
    SnipRoundRectangle => "snipRoundRect",
    Snip1Rectangle => "snip1Rect",
    Snip2SameRectangle => "snip2SameRect",
    Snip2DiagRectangle => "snip2DiagRect",
    Plaque => "plaque",
    Oval => "ellipse",
    Tear => "teardrop",
    /// Arrow-shaped pentagon
    Pentagon => "homePlate",
    Chevron => "chevron",
    PieWedge => "pieWedge",
    Pie => "pie",
    BlockArc => "blockArc",
    Donut => "donut",
    NoSymbol => "noSmoking",
    RightArrow => "rightArrow",
    LeftArrow => "leftArrow",
    UpArrow => "upArrow",
    DownArrow => "downArrow",
    StripedRightArrow => "stripedRightArrow",
    NotchedRightArrow => "notchedRightArrow",
    BentUpArrow => "bentUpArrow",
    LeftRightArrow => "leftRightArrow",
    UpDownArrow => "upDownArrow",
    LeftUpArrow => "leftUpArrow",
    LeftRightUpArrow => "leftRightUpArrow",
    QuadArrow => "quadArrow",
    LeftArrowCallout => "leftArrowCallout",
    RightArrowCallout => "rightArrowCallout",
    UpArrowCallout => "upArrowCallout",
    DownArrowCallout => "downArrowCallout",
    LeftRightArrowCallout => "leftRightArrowCallout",
    UpDownArrowCallout => "upDownArrowCallout",
    QuadArrowCallout => "quadArrowCallout",
    BentArrow => "bentArrow",
    UTurnArrow => "uturnArrow",
    CircularArrow => "circularArrow",
    LeftCircularArrow => "leftCircularArrow",
    LeftRightCircularArrow => "leftRightCircularArrow",
    CurvedRightArrow => "curvedRightArrow",
    CurvedLeftArrow => "curvedLeftArrow",
    CurvedUpArrow => "curvedUpArrow",
    CurvedDownArrow => "curvedDownArrow",
    SwooshArrow => "swooshArrow",
    Cube => "cube",
    Can => "can",
    LightningBolt => "lightningBolt",
    Heart => "heart",
    Sun => "sun",
    Moon => "moon",
    SmileyFace => "smileyFace",
    Explosion1 => "irregularSeal1",
    Explosion2 => "irregularSeal2",
    FoldedCorner => "foldedCorner",
    Bevel => "bevel",
    Frame => "frame",
    HalfFrame => "halfFrame",
    Corner => "corner",
    DiagonalStripe => "diagStripe",
    Chord => "chord",
    Arc => "arc",
    LeftBracket => "leftBracket",
    RightBracket => "rightBracket",
    LeftBrace => "leftBrace",
    RightBrace => "rightBrace",
    DoubleBracket => "bracketPair",
    DoubleBrace => "bracePair",
    StraightConnector1 => "straightConnector1",
    BentConnector2 => "bentConnector2",
    BentConnector3 => "bentConnector3",
    BentConnector4 => "bentConnector4",
    BentConnector5 => "bentConnector5",
    CurvedConnector2 => "curvedConnector2",
    CurvedConnector3 => "curvedConnector3",
    CurvedConnector4 => "curvedConnector4",
    CurvedConnector5 => "curvedConnector5",
    LineCallout1NoBorder => "callout1",
    LineCallout2NoBorder => "callout2",
    LineCallout3NoBorder => "callout3",
    LineCallout1AccentBar => "accentCallout1",
    LineCallout2AccentBar => "accentCallout2",
    LineCallout3AccentBar => "accentCallout3",
    LineCallout1 => "borderCallout1",
    LineCallout2 => "borderCallout2",
    LineCallout3 => "borderCallout3",
    LineCallout1BorderAndAccentBar => "accentBorderCallout1",
    LineCallout2BorderAndAccentBar => "accentBorderCallout2",
    LineCallout3BorderAndAccentBar => "accentBorderCallout3",
    RectangularCallout => "wedgeRectCallout",
    RoundedRectangularCallout => "wedgeRoundRectCallout",
    OvalCallout => "wedgeEllipseCallout",
    CloudCallout => "cloudCallout",
    Cloud => "cloud",
    DownRibbon => "ribbon",
    UpRibbon => "ribbon2",
    CurvedDownRibbon => "ellipseRibbon",
    CurvedUpRibbon => "ellipseRibbon2",
    LeftRightRibbon => "leftRightRibbon",
    VerticalScroll => "verticalScroll",
    HorizontalScroll => "horizontalScroll",
    Wave => "wave",
    DoubleWave => "doubleWave",
    Cross => "plus",
    FlowchartProcess => "flowChartProcess",
    FlowchartDecision => "flowChartDecision",
    FlowchartData => "flowChartInputOutput",
    FlowchartPredefinedProcess => "flowChartPredefinedProcess",
    FlowchartInternalStorage => "flowChartInternalStorage",
    FlowchartDocument => "flowChartDocument",
    FlowchartMultidocument => "flowChartMultidocument",
    FlowchartTerminator => "flowChartTerminator",
    FlowchartPreparation => "flowChartPreparation",
    FlowchartManualInput => "flowChartManualInput",
    FlowchartManualOperation => "flowChartManualOperation",
    FlowchartConnector => "flowChartConnector",
    FlowchartCard => "flowChartPunchedCard",
    FlowchartPunchedTape => "flowChartPunchedTape",
    FlowchartSummingJunction => "flowChartSummingJunction",
    FlowchartOr => "flowChartOr",
    FlowchartCollate => "flowChartCollate",
    FlowchartSort => "flowChartSort",
    FlowchartExtract => "flowChartExtract",
    FlowchartMerge => "flowChartMerge",
    FlowchartStoredData => "flowChartOnlineStorage",
    FlowchartOfflineStorage => "flowChartOfflineStorage",
    FlowchartSequentialAccessStorage => "flowChartMagneticTape",
    FlowchartMagneticDisk => "flowChartMagneticDisk",
    FlowchartDirectAccessStorage => "flowChartMagneticDrum",
    FlowchartDisplay => "flowChartDisplay",
    FlowchartDelay => "flowChartDelay",
    FlowchartAlternateProcess => "flowChartAlternateProcess",
    FlowchartOffpageConnector => "flowChartOffpageConnector",
    ActionButtonCustom => "actionButtonBlank",
    ActionButtonHome => "actionButtonHome",
    ActionButtonHelp => "actionButtonHelp",
    ActionButtonInformation => "actionButtonInformation",
    ActionButtonForwardOrNext => "actionButtonForwardNext",
    ActionButtonBackOrPrevious => "actionButtonBackPrevious",
    ActionButtonEnd => "actionButtonEnd",
    ActionButtonBeginning => "actionButtonBeginning",
    ActionButtonReturn => "actionButtonReturn",
    ActionButtonDocument => "actionButtonDocument",
    ActionButtonSound => "actionButtonSound",
    ActionButtonMovie => "actionButtonMovie",
    Gear6 => "gear6",
    Gear9 => "gear9",
    Funnel => "funnel",
    MathPlus => "mathPlus",
    MathMinus => "mathMinus",
    MathMultiply => "mathMultiply",
    MathDivide => "mathDivide",
    MathEqual => "mathEqual",
    MathNotEqual => "mathNotEqual",
    CornerTabs => "cornerTabs",
    SquareTabs => "squareTabs",
    PlaqueTabs => "plaqueTabs",
    ChartX => "chartX",
    ChartStar => "chartStar",
    ChartPlus => "chartPlus",
}

impl AutoShapeType {
    /// Parse a `prst` token. Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        BY_TOKEN.get(s).copied()
    }
}

impl fmt::Display for AutoShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}
