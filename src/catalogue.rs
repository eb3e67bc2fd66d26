//! The production topic catalogue: every named quantity the bridge
//! knows how to read or write, declared as data rather than code so the
//! scheduler's decode/encode loop never special-cases a topic by name.

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::model_table::MODEL_NAMES;
use crate::topic::{Catalogue, TopicDef};
use crate::value::{Domain, Value};

const ON_OFF: &[&str] = &["Off", "On"];
const DISABLED_ENABLED: &[&str] = &["Disabled", "Enabled"];
const INACTIVE_ACTIVE: &[&str] = &["Inactive", "Active"];

/// Builds the full catalogue described in the protocol notes. Byte
/// offsets below are main-frame indices unless the entry is marked
/// `optional: true`, in which case they index the 19-byte optional-PCB
/// body.
pub fn build() -> Catalogue {
    let model_range = Domain::Range { min: 0.0, max: (MODEL_NAMES.len() as f64) - 1.0 };

    Catalogue::new(vec![
        TopicDef {
            name: "Control/HeatpumpState",
            help: "Heatpump state",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::Bits7_8(4),
            encoder: Some(Encoder::FixedBit { byte: 4, on_value: 2, off_value: 1 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Pump/ServiceMode",
            help: "Set Water Pump to service mode, max speed",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::ServiceModeFlag(4),
            encoder: Some(Encoder::FixedBit { byte: 4, on_value: 32, off_value: 16 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/Reset",
            help: "Perform a reset on the heat pump",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::Const(0),
            encoder: Some(Encoder::FixedBit { byte: 8, on_value: 1, off_value: 0 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Pump/Flow",
            help: "Current pump flow rate",
            unit: Some("l/min"),
            domain: Domain::Range { min: 0.0, max: 256.0 },
            decoder: Decoder::PumpFlow { b169: 169, b170: 170 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/DHW/Force",
            help: "Enforce DHW heating operation to happen now",
            unit: None,
            domain: Domain::Enum(&["Disabled", "Enabled"]),
            decoder: Decoder::Bits1_2(4),
            encoder: Some(Encoder::FixedBit { byte: 4, on_value: 128, off_value: 64 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/OperatingMode",
            help: "Operating mode of the heat pump, as settable on the remote control",
            unit: None,
            domain: Domain::Enum(&[
                "Heat", "Cool", "Auto(heat)", "DHW", "Heat+DHW", "Cool+DHW", "Auto(heat)+DHW",
                "Auto(cool)", "Auto(cool)+DHW",
            ]),
            decoder: Decoder::OpMode(6),
            encoder: Some(Encoder::OpModeTable { byte: 6 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Inlet",
            help: "Inlet / return-flow water temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.75, max: 127.75 },
            decoder: Decoder::InletTemp { int_byte: 143, frac_byte: 118 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Outlet",
            help: "Outlet / forward-flow water temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.75, max: 127.75 },
            decoder: Decoder::OutletTemp { int_byte: 144, frac_byte: 118 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Target",
            help: "Outlet target temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(153),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Compressor/Freq",
            help: "Compressor frequency",
            unit: Some("Hz"),
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(166),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/DHW/TargetTemp",
            help: "Water tank target temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(42),
            encoder: Some(Encoder::Offset128 { byte: 42 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/DHW",
            help: "Water tank temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(141),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Usage/Runtime",
            help: "Total runtime of the compressor",
            unit: Some("h"),
            domain: Domain::Range { min: -1.0, max: 65534.0 },
            decoder: Decoder::TwoByteMinus1 { hi: 183, lo: 182 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Usage/Starts",
            help: "Total number of compressor starts",
            unit: None,
            domain: Domain::Range { min: -1.0, max: 65534.0 },
            decoder: Decoder::TwoByteMinus1 { hi: 180, lo: 179 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/MainSchedule",
            help: "Main thermostat schedule used or not used",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits1_2(5),
            encoder: Some(Encoder::FixedBit { byte: 5, on_value: 128, off_value: 64 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Outside",
            help: "Outside ambient temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(142),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Production/Heat",
            help: "Current thermal heat power production used for heating",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(194),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Consumption/Heat",
            help: "Current electrical power consumption used for heating",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(193),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/PowerfulMode",
            help: "Powerful mode timeout",
            unit: None,
            domain: Domain::Enum(&["Off", "30min", "60min", "90min"]),
            decoder: Decoder::Right3(7),
            // +73 bias carried verbatim from the original source's own
            // open question about whether the offset is correct.
            encoder: Some(Encoder::PowerfulModeBias { byte: 7 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/QuietMode/Schedule",
            help: "Quiet mode schedule used or not used",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits1_2(7),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/QuietMode/Level",
            help: "Level of quiet mode (the higher the quieter)",
            unit: None,
            domain: Domain::Enum(&["Off", "Level 1", "Level 2", "Level 3"]),
            decoder: Decoder::Bits3_5(7),
            encoder: Some(Encoder::QuietLevelTable { byte: 7 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/HolidayMode",
            help: "Whether holiday mode is off, active or scheduled",
            unit: None,
            domain: Domain::Enum(&["Off", "Scheduled", "Active"]),
            decoder: Decoder::Bits3_4(5),
            encoder: Some(Encoder::FixedBit { byte: 5, on_value: 32, off_value: 16 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/ThreeWayValve",
            help: "Switch state of three way valve, heating or DHW",
            unit: None,
            domain: Domain::Enum(&["Room", "DHW"]),
            decoder: Decoder::Bits7_8(111),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/OutsidePipe",
            help: "Outside pipe temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(158),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/DHW/Delta",
            help: "Hysteresis for DHW tank heating",
            unit: Some("K"),
            domain: Domain::Range { min: -12.0, max: -2.0 },
            decoder: Decoder::IMinus128(99),
            encoder: Some(Encoder::Offset128 { byte: 99 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Heating/Delta",
            help: "Aimed outlet-inlet temperature delta when heating",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(84),
            encoder: Some(Encoder::Offset128 { byte: 84 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Cooling/Delta",
            help: "Aimed outlet-inlet temperature delta when cooling",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(94),
            encoder: Some(Encoder::Offset128 { byte: 94 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/DHW/HolidayShiftTemp",
            help: "Holiday shift temperature for DHW tank heating",
            unit: Some("K"),
            domain: Domain::Range { min: -15.0, max: 15.0 },
            decoder: Decoder::IMinus128(44),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Defrosting",
            help: "Defrosting currently ongoing or not",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits5_6(111),
            encoder: Some(Encoder::FixedBit { byte: 8, on_value: 2, off_value: 0 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/RoomThermostat",
            help: "Remote control thermostat temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(156),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/Heat/RequestTemp",
            help: "Heat requested shift temp (-5 to 5) or direct heat temp (20 to max)",
            unit: Some("°C"),
            domain: Domain::Range { min: -5.0, max: 127.0 },
            decoder: Decoder::IMinus128(38),
            encoder: Some(Encoder::Offset128 { byte: 38 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/Cool/RequestTemp",
            help: "Cool requested shift temp (-5 to 5) or direct cool temp (5 to 20)",
            unit: Some("°C"),
            domain: Domain::Range { min: -5.0, max: 20.0 },
            decoder: Decoder::IMinus128(39),
            encoder: Some(Encoder::Offset128 { byte: 39 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/Heat/RequestTemp",
            help: "Heat requested shift temp (-5 to 5) or direct heat temp (20 to max)",
            unit: Some("°C"),
            domain: Domain::Range { min: -5.0, max: 127.0 },
            decoder: Decoder::IMinus128(40),
            encoder: Some(Encoder::Offset128 { byte: 40 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/Cool/RequestTemp",
            help: "Cool requested shift temp (-5 to 5) or direct cool temp (5 to 20)",
            unit: Some("°C"),
            domain: Domain::Range { min: -5.0, max: 20.0 },
            decoder: Decoder::IMinus128(41),
            encoder: Some(Encoder::Offset128 { byte: 41 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/1/Outlet",
            help: "Zone 1 water outlet temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(145),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/2/Outlet",
            help: "Zone 2 water outlet temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(146),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Production/Cool",
            help: "Thermal cooling power production",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(196),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Consumption/Cool",
            help: "Electrical power consumption for cooling",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(195),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Production/DHW",
            help: "Thermal heating power production for DHW",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(198),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Energy/Consumption/DHW",
            help: "Electrical power consumption for DHW",
            unit: Some("W"),
            domain: Domain::Range { min: -200.0, max: 50800.0 },
            decoder: Decoder::Energy(197),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/1/OutletTarget",
            help: "Zone 1 water target temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(147),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/2/OutletTarget",
            help: "Zone 2 water target temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(148),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Error",
            help: "Error code of the last error that happened",
            unit: None,
            domain: Domain::Any,
            decoder: Decoder::ErrorInfo { b113: 113, b114: 114 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Heating/HolidayShiftTemp",
            help: "Room heating holiday shift temperature",
            unit: Some("K"),
            domain: Domain::Range { min: -15.0, max: 15.0 },
            decoder: Decoder::IMinus128(43),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Buffer",
            help: "Actual buffer temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(149),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Solar",
            help: "Actual solar temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(150),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Pool",
            help: "Actual pool temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(151),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/MainHexOutlet",
            help: "Outlet 2, after heat exchanger water temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(154),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/Discharge",
            help: "Discharge temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(155),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/InsidePipe",
            help: "Inside pipe temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(157),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/Defrost",
            help: "Defrost temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(159),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/EvaOutlet",
            help: "Eva outlet temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(160),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/BypassOutlet",
            help: "Bypass outlet temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(161),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Internal/IPM",
            help: "IPM temperature measurement",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(162),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/1/Actual",
            help: "Zone 1 actual temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(139),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Temp/Zones/2/Actual",
            help: "Zone 2 actual temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(140),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/DHW",
            help: "When enabled, backup/booster heater can be used for DHW heating",
            unit: None,
            domain: Domain::Enum(&["Blocked", "Free"]),
            decoder: Decoder::Bits5_6(9),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/Room",
            help: "When enabled, backup/booster heater can be used for room heating",
            unit: None,
            domain: Domain::Enum(&["Blocked", "Free"]),
            decoder: Decoder::Bits7_8(9),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/HeatingRod/Internal",
            help: "Internal backup heater state",
            unit: None,
            domain: Domain::Enum(INACTIVE_ACTIVE),
            decoder: Decoder::Bits7_8(112),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/HeatingRod/External",
            help: "External backup heater state",
            unit: None,
            domain: Domain::Enum(INACTIVE_ACTIVE),
            decoder: Decoder::Bits5_6(112),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Fan/1/Speed",
            help: "Fan 1 motor rotation speed",
            unit: Some("r/min"),
            domain: Domain::Range { min: -10.0, max: 2540.0 },
            decoder: Decoder::IMinus1Times10(173),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Fan/2/Speed",
            help: "Fan 2 motor rotation speed",
            unit: Some("r/min"),
            domain: Domain::Range { min: -10.0, max: 2540.0 },
            decoder: Decoder::IMinus1Times10(174),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Pressure/High",
            help: "High pressure",
            unit: Some("Kgf/cm2"),
            domain: Domain::Range { min: -0.2, max: 50.8 },
            decoder: Decoder::IMinus1Div5(163),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Pump/Speed",
            help: "Pump rotation speed",
            unit: Some("r/min"),
            domain: Domain::Range { min: -50.0, max: 12700.0 },
            decoder: Decoder::IMinus1Times50(171),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Pressure/Low",
            help: "Low pressure",
            unit: Some("Kgf/cm2"),
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(164),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Compressor/Current",
            help: "Compressor electrical current",
            unit: Some("A"),
            domain: Domain::Range { min: -0.2, max: 50.8 },
            decoder: Decoder::IMinus1Div5(165),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/HeatingRod/Enforce",
            help: "Force heating rod",
            unit: None,
            domain: Domain::Enum(INACTIVE_ACTIVE),
            decoder: Decoder::Bits5_6(5),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Control/DHW/Sterilization",
            help: "Sterilisation state",
            unit: None,
            domain: Domain::Enum(INACTIVE_ACTIVE),
            decoder: Decoder::Bits5_6(117),
            encoder: Some(Encoder::FixedBit { byte: 8, on_value: 4, off_value: 0 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/DHW/SterilizationTemp",
            help: "Sterilisation temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(100),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/DHW/SterilizationMaxTime",
            help: "Sterilisation maximum time",
            unit: Some("min"),
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(101),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/HeatCurve/TargetHigh",
            help: "Target temperature at highest point on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(75),
            encoder: Some(Encoder::Offset128 { byte: 75 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/HeatCurve/TargetLow",
            help: "Target temperature at lowest point on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(76),
            encoder: Some(Encoder::Offset128 { byte: 76 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/HeatCurve/OutsideHigh",
            help: "Highest outside temperature on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(78),
            encoder: Some(Encoder::Offset128 { byte: 78 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/HeatCurve/OutsideLow",
            help: "Lowest outside temperature on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(77),
            encoder: Some(Encoder::Offset128 { byte: 77 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/CoolCurve/TargetHigh",
            help: "Target temperature at highest point on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(86),
            encoder: Some(Encoder::Offset128 { byte: 86 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/CoolCurve/TargetLow",
            help: "Target temperature at lowest point on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(87),
            encoder: Some(Encoder::Offset128 { byte: 87 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/CoolCurve/OutsideHigh",
            help: "Highest outside temperature on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(89),
            encoder: Some(Encoder::Offset128 { byte: 89 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/1/CoolCurve/OutsideLow",
            help: "Lowest outside temperature on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(88),
            encoder: Some(Encoder::Offset128 { byte: 88 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/HeatCurve/TargetHigh",
            help: "Target temperature at highest point on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(79),
            encoder: Some(Encoder::Offset128 { byte: 79 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/HeatCurve/TargetLow",
            help: "Target temperature at lowest point on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(80),
            encoder: Some(Encoder::Offset128 { byte: 80 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/HeatCurve/OutsideHigh",
            help: "Highest outside temperature on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(82),
            encoder: Some(Encoder::Offset128 { byte: 82 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/HeatCurve/OutsideLow",
            help: "Lowest outside temperature on the heating curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(81),
            encoder: Some(Encoder::Offset128 { byte: 81 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/CoolCurve/TargetHigh",
            help: "Target temperature at highest point on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(90),
            encoder: Some(Encoder::Offset128 { byte: 90 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/CoolCurve/TargetLow",
            help: "Target temperature at lowest point on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(91),
            encoder: Some(Encoder::Offset128 { byte: 91 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/CoolCurve/OutsideHigh",
            help: "Highest outside temperature on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(93),
            encoder: Some(Encoder::Offset128 { byte: 93 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/2/CoolCurve/OutsideLow",
            help: "Lowest outside temperature on the cooling curve",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(92),
            encoder: Some(Encoder::Offset128 { byte: 92 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Heating/Mode",
            help: "Compensation curve or direct mode for heating",
            unit: None,
            domain: Domain::Enum(&["Comp. Curve", "Direct"]),
            decoder: Decoder::Bits7_8(28),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Heating/OffOutdoorTemp",
            help: "Above this outdoor temperature all heating is turned off",
            unit: Some("°C"),
            domain: Domain::Range { min: 5.0, max: 35.0 },
            decoder: Decoder::IMinus128(83),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/OnOutdoorTemp",
            help: "Below this temperature the backup heating rod is allowed by heatpump logic",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(85),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatToCoolTemp",
            help: "Outdoor temperature to switch from heat to cool mode when in auto setting",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(95),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/CoolToHeatTemp",
            help: "Outdoor temperature to switch from cool to heat mode when in auto setting",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(96),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Cooling/Mode",
            help: "Compensation curve or direct mode for cooling",
            unit: None,
            domain: Domain::Enum(&["Comp. Curve", "Direct"]),
            decoder: Decoder::Bits5_6(28),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Usage/HeatingRod/Room",
            help: "Electric heater operating time for room heating",
            unit: Some("h"),
            domain: Domain::Range { min: -1.0, max: 65534.0 },
            decoder: Decoder::TwoByteMinus1 { hi: 186, lo: 185 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Statistics/Usage/HeatingRod/DHW",
            help: "Electric heater operating time for DHW",
            unit: Some("h"),
            domain: Domain::Range { min: -1.0, max: 65534.0 },
            decoder: Decoder::TwoByteMinus1 { hi: 189, lo: 188 },
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Model/ID",
            help: "Heat pump model",
            unit: None,
            domain: model_range,
            decoder: Decoder::ModelId,
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Model/Name",
            help: "Heat pump model",
            unit: None,
            domain: Domain::Any,
            decoder: Decoder::ModelName,
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Status/Pump/Duty",
            help: "Current pump duty",
            unit: None,
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(172),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Zones/State",
            help: "Zones connected to the device",
            unit: None,
            domain: Domain::Enum(&["Zone1 active", "Zone2 active", "Zone1 and zone2 active"]),
            decoder: Decoder::Bits1_2(6),
            encoder: Some(Encoder::ZonesStateTable { byte: 6 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Pump/MaxDuty",
            help: "Maximum pump duty configured",
            unit: None,
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(45),
            encoder: Some(Encoder::Offset1 { byte: 45 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/DelayTime",
            help: "Heater delay time (J-series only)",
            unit: Some("min"),
            domain: Domain::Range { min: -1.0, max: 254.0 },
            decoder: Decoder::IMinus1(104),
            encoder: Some(Encoder::Offset1 { byte: 104 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/StartDelta",
            help: "Heater start delta (J-series only)",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(105),
            encoder: Some(Encoder::Offset128 { byte: 105 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/HeatingRod/StopDelta",
            help: "Heater stop delta (J-series only)",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(106),
            encoder: Some(Encoder::Offset128 { byte: 106 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Buffer/Installed",
            help: "Buffer tank installed",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits5_6(24),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/DHW/Installed",
            help: "Buffer DHW tank installed",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits7_8(24),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Solar/Mode",
            help: "Solar mode (disabled, to buffer, to DHW)",
            unit: None,
            domain: Domain::Enum(&["Disabled", "Buffer", "DHW"]),
            decoder: Decoder::Bits3_4(24),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Solar/OnDelta",
            help: "Solar heating delta on",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(61),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Solar/OffDelta",
            help: "Solar heating delta off",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(62),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Solar/FrostProtection",
            help: "Solar frost protection temperature",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(63),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Solar/HighLimit",
            help: "Solar max temperature limit",
            unit: Some("°C"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(64),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Pump/FlowRateMode",
            help: "Mode of pump control",
            unit: None,
            domain: Domain::Enum(&["DeltaT", "Max flow"]),
            decoder: Decoder::Bits3_4(29),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/LiquidType",
            help: "Type of liquid in system",
            unit: None,
            domain: Domain::Enum(&["Water", "Glycol"]),
            decoder: Decoder::Bit1(20),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/AltExternalSensor",
            help: "If external outdoor sensor is used",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits3_4(20),
            encoder: Some(Encoder::FixedBit { byte: 20, on_value: 32, off_value: 16 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/AntiFreezeMode",
            help: "Is anti freeze mode enabled or disabled",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits5_6(20),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/OptionalPCB",
            help: "If the optional PCB is enabled (if installed)",
            unit: None,
            domain: Domain::Enum(DISABLED_ENABLED),
            decoder: Decoder::Bits7_8(20),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Sensor/Zones/1",
            help: "Setting of the sensor for zone 1",
            unit: None,
            domain: Domain::Enum(&["Water Temperature", "External Thermostat", "Internal Thermostat", "Thermistor"]),
            decoder: Decoder::LowNibbleMinus1(22),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Sensor/Zones/2",
            help: "Setting of the sensor for zone 2",
            unit: None,
            domain: Domain::Enum(&["Water Temperature", "External Thermostat", "Internal Thermostat", "Thermistor"]),
            decoder: Decoder::HighNibbleMinus1(22),
            encoder: None,
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/Buffer/Delta",
            help: "Delta of buffer tank setting",
            unit: Some("K"),
            domain: Domain::Range { min: -128.0, max: 127.0 },
            decoder: Decoder::IMinus128(59),
            encoder: Some(Encoder::Offset128 { byte: 59 }),
            optional: false,
            default: None,
        },
        TopicDef {
            name: "Config/ExternalPadHeater",
            help: "If the external pad heater is enabled (if installed)",
            unit: None,
            domain: Domain::Enum(&["Disabled", "Type-A", "Type-B"]),
            decoder: Decoder::Bits3_4(25),
            encoder: Some(Encoder::PadHeaterTriTable { byte: 25 }),
            optional: false,
            default: None,
        },
        // --- optional-PCB frame topics below (19-byte body) ---
        TopicDef {
            name: "Actor/Zones/1/WaterPump",
            help: "Zone 1 water pump action request",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 4, shift: 7, mask: 0b1 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Actor/Zones/1/MixingValve",
            help: "Zone 1 mixing valve action request",
            unit: None,
            domain: Domain::Enum(&["Off", "Decrease", "Increase"]),
            decoder: Decoder::RawBits { byte: 4, shift: 5, mask: 0b11 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Actor/Zones/2/WaterPump",
            help: "Zone 2 water pump action request",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 4, shift: 4, mask: 0b1 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Actor/Zones/2/MixingValve",
            help: "Zone 2 mixing valve action request",
            unit: None,
            domain: Domain::Enum(&["Off", "Decrease", "Increase"]),
            decoder: Decoder::RawBits { byte: 4, shift: 2, mask: 0b11 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Actor/Zones/Pool/WaterPump",
            help: "Pool water pump action request",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 4, shift: 1, mask: 0b1 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Actor/Solar/WaterPump",
            help: "Solar water pump action request",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 4, shift: 0, mask: 0b1 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Status/Alarm",
            help: "Alarm state",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 5, shift: 0, mask: 0b1 },
            encoder: None,
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/HeatCoolMode",
            help: "Set device to heat or cool mode",
            unit: None,
            domain: Domain::Enum(&["Heat", "Cool"]),
            decoder: Decoder::RawBits { byte: 6, shift: 7, mask: 0b1 },
            encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 7, mask: 0b1 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/CompressorState",
            help: "Turn compressor on or off",
            unit: None,
            domain: Domain::Enum(ON_OFF),
            decoder: Decoder::RawBits { byte: 6, shift: 6, mask: 0b1 },
            encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 6, mask: 0b1 }),
            optional: true,
            default: Some(Value::Int(1)),
        },
        TopicDef {
            name: "Control/Optional/SmartGridMode",
            help: "Select smart grid (SG) mode",
            unit: None,
            domain: Domain::Enum(&["Normal", "Off", "Capacity 1", "Capacity 2"]),
            decoder: Decoder::RawBits { byte: 6, shift: 4, mask: 0b11 },
            encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 4, mask: 0b11 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/ExternalThermostat1State",
            help: "Action request of external thermostat 1",
            unit: None,
            domain: Domain::Enum(&["Off", "Heat", "Cool", "HeatAndCool"]),
            decoder: Decoder::RawBits { byte: 6, shift: 2, mask: 0b11 },
            encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 2, mask: 0b11 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/ExternalThermostat2State",
            help: "Action request of external thermostat 2",
            unit: None,
            domain: Domain::Enum(&["Off", "Heat", "Cool", "HeatAndCool"]),
            decoder: Decoder::RawBits { byte: 6, shift: 0, mask: 0b11 },
            encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 0, mask: 0b11 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/DemandControl",
            help: "Demand control setting",
            unit: None,
            domain: Domain::Range { min: 0.0, max: 100.0 },
            decoder: Decoder::DemandControl(14),
            encoder: Some(Encoder::DemandControlEncode { byte: 14 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/PoolTemp",
            help: "Pool temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(7),
            encoder: Some(Encoder::NtcEncode { byte: 7 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/BufferTemp",
            help: "Buffer temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(8),
            encoder: Some(Encoder::NtcEncode { byte: 8 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/Zones/1/RoomTemp",
            help: "Zone 1 room temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(10),
            encoder: Some(Encoder::NtcEncode { byte: 10 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/Zones/1/WaterTemp",
            help: "Zone 1 water temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(16),
            encoder: Some(Encoder::NtcEncode { byte: 16 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/Zones/2/RoomTemp",
            help: "Zone 2 room temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(11),
            encoder: Some(Encoder::NtcEncode { byte: 11 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/Zones/2/WaterTemp",
            help: "Zone 2 water temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(15),
            encoder: Some(Encoder::NtcEncode { byte: 15 }),
            optional: true,
            default: None,
        },
        TopicDef {
            name: "Control/Optional/Sensors/SolarTemp",
            help: "Solar water temperature sensor reading",
            unit: None,
            domain: Domain::Range { min: -78.0, max: 120.0 },
            decoder: Decoder::NtcLookup(13),
            encoder: Some(Encoder::NtcEncode { byte: 13 }),
            optional: true,
            default: None,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_has_no_duplicate_names() {
        let catalogue = build();
        let mut names: Vec<&str> = catalogue.iter().map(|(_, def, _)| def.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn known_topics_are_reachable_by_name() {
        let catalogue = build();
        assert!(catalogue.find("Control/OperatingMode").is_some());
        assert!(catalogue.find("control/operatingmode").is_some());
        assert!(catalogue.find("Control/Optional/DemandControl").is_some());
        assert!(catalogue.find("Does/Not/Exist").is_none());
    }

    #[test]
    fn optional_topics_are_flagged_for_the_short_frame() {
        let catalogue = build();
        let idx = catalogue.find("Actor/Zones/1/WaterPump").unwrap();
        assert!(catalogue.def(idx).optional);
        let idx = catalogue.find("Status/Temp/Outside").unwrap();
        assert!(!catalogue.def(idx).optional);
    }

    #[test]
    fn writable_topics_have_an_encoder() {
        let catalogue = build();
        let idx = catalogue.find("Control/OperatingMode").unwrap();
        assert!(catalogue.def(idx).writable());
        let idx = catalogue.find("Status/Temp/Outside").unwrap();
        assert!(!catalogue.def(idx).writable());
    }
}
