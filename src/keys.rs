//! Every configuration keyword the rule kinds understand.

use serde_json::Value as Json;

use crate::attributes::Key;

// Conditions shared by every rule kind.

pub const RANDOM: Key<f32> = Key::new("random");
pub const DIMENSION: Key<String> = Key::new("dimension");
pub const DIMENSION_MOD: Key<String> = Key::new("dimensionmod");
pub const MINTIME: Key<i32> = Key::new("mintime");
pub const MAXTIME: Key<i32> = Key::new("maxtime");
pub const MINHEIGHT: Key<i32> = Key::new("minheight");
pub const MAXHEIGHT: Key<i32> = Key::new("maxheight");
pub const WEATHER: Key<String> = Key::new("weather");
pub const CATEGORY: Key<String> = Key::new("category");
pub const DIFFICULTY: Key<String> = Key::new("difficulty");
pub const MINSPAWNDIST: Key<f32> = Key::new("minspawndist");
pub const MAXSPAWNDIST: Key<f32> = Key::new("maxspawndist");
pub const MINLIGHT: Key<i32> = Key::new("minlight");
pub const MAXLIGHT: Key<i32> = Key::new("maxlight");
pub const MINDIFFICULTY: Key<f32> = Key::new("mindifficulty");
pub const MAXDIFFICULTY: Key<f32> = Key::new("maxdifficulty");
pub const SEESKY: Key<bool> = Key::new("seesky");
pub const BLOCK: Key<Json> = Key::new("block");
pub const BLOCKOFFSET: Key<Json> = Key::new("blockoffset");
pub const BIOME: Key<String> = Key::new("biome");
pub const BIOMETYPE: Key<String> = Key::new("biometype");
pub const HELMET: Key<Json> = Key::new("helmet");
pub const CHESTPLATE: Key<Json> = Key::new("chestplate");
pub const LEGGINGS: Key<Json> = Key::new("leggings");
pub const BOOTS: Key<Json> = Key::new("boots");
pub const PLAYER_HELDITEM: Key<Json> = Key::new("playerhelditem");
pub const HELDITEM: Key<Json> = Key::new("helditem");
pub const OFFHANDITEM: Key<Json> = Key::new("offhanditem");
pub const BOTHHANDSITEM: Key<Json> = Key::new("bothhandsitem");
pub const STRUCTURE: Key<String> = Key::new("structure");
pub const STATE: Key<String> = Key::new("state");
pub const PSTATE: Key<String> = Key::new("pstate");
pub const SUMMER: Key<bool> = Key::new("summer");
pub const WINTER: Key<bool> = Key::new("winter");
pub const SPRING: Key<bool> = Key::new("spring");
pub const AUTUMN: Key<bool> = Key::new("autumn");
pub const GAMESTAGE: Key<String> = Key::new("gamestage");
pub const INCITY: Key<bool> = Key::new("incity");
pub const INSTREET: Key<bool> = Key::new("instreet");
pub const INSPHERE: Key<bool> = Key::new("insphere");
pub const INBUILDING: Key<bool> = Key::new("inbuilding");
pub const AMULET: Key<Json> = Key::new("amulet");
pub const RING: Key<Json> = Key::new("ring");
pub const BELT: Key<Json> = Key::new("belt");
pub const TRINKET: Key<Json> = Key::new("trinket");
pub const HEAD: Key<Json> = Key::new("head");
pub const BODY: Key<Json> = Key::new("body");
pub const CHARM: Key<Json> = Key::new("charm");

// Conditions on the entity and event.

pub const ONJOIN: Key<bool> = Key::new("onjoin");
pub const PHASE: Key<String> = Key::new("phase");
pub const HOSTILE: Key<bool> = Key::new("hostile");
pub const PASSIVE: Key<bool> = Key::new("passive");
pub const CANSPAWNHERE: Key<bool> = Key::new("canspawnhere");
pub const NOTCOLLIDING: Key<bool> = Key::new("notcolliding");
pub const SPAWNER: Key<bool> = Key::new("spawner");
pub const INCONTROL: Key<bool> = Key::new("incontrol");
pub const MOB: Key<String> = Key::new("mob");
pub const PLAYER: Key<bool> = Key::new("player");
pub const REALPLAYER: Key<bool> = Key::new("realplayer");
pub const FAKEPLAYER: Key<bool> = Key::new("fakeplayer");
pub const EXPLOSION: Key<bool> = Key::new("explosion");
pub const PROJECTILE: Key<bool> = Key::new("projectile");
pub const FIRE: Key<bool> = Key::new("fire");
pub const MAGIC: Key<bool> = Key::new("magic");
pub const SOURCE: Key<String> = Key::new("source");
pub const MOD: Key<String> = Key::new("mod");
pub const MINCOUNT: Key<Json> = Key::new("mincount");
pub const MAXCOUNT: Key<Json> = Key::new("maxcount");
pub const DAYCOUNT: Key<i32> = Key::new("daycount");
pub const MINDAYCOUNT: Key<i32> = Key::new("mindaycount");
pub const MAXDAYCOUNT: Key<i32> = Key::new("maxdaycount");

// Rule outcome and modifiers.

pub const ACTION_RESULT: Key<String> = Key::new("result");
pub const ACTION_CONTINUE: Key<bool> = Key::new("continue");
pub const ACTION_SETXP: Key<i32> = Key::new("setxp");
pub const ACTION_ADDXP: Key<f32> = Key::new("addxp");
pub const ACTION_MULTXP: Key<f32> = Key::new("multxp");

// Actions run on a matching living entity.

pub const ACTION_HEALTHSET: Key<f32> = Key::new("healthset");
pub const ACTION_HEALTHMULTIPLY: Key<f32> = Key::new("healthmultiply");
pub const ACTION_HEALTHADD: Key<f32> = Key::new("healthadd");
pub const ACTION_SPEEDSET: Key<f32> = Key::new("speedset");
pub const ACTION_SPEEDMULTIPLY: Key<f32> = Key::new("speedmultiply");
pub const ACTION_SPEEDADD: Key<f32> = Key::new("speedadd");
pub const ACTION_DAMAGESET: Key<f32> = Key::new("damageset");
pub const ACTION_DAMAGEMULTIPLY: Key<f32> = Key::new("damagemultiply");
pub const ACTION_DAMAGEADD: Key<f32> = Key::new("damageadd");
pub const ACTION_SIZEMULTIPLY: Key<f32> = Key::new("sizemultiply");
pub const ACTION_SIZEADD: Key<f32> = Key::new("sizeadd");
pub const ACTION_ANGRY: Key<bool> = Key::new("angry");
pub const ACTION_MOBNBT: Key<Json> = Key::new("nbt");
pub const ACTION_CUSTOMNAME: Key<String> = Key::new("customname");
pub const ACTION_MESSAGE: Key<String> = Key::new("message");
/// Equips the main hand. Shares its name with the [`HELDITEM`] condition;
/// spawn rules read it as an action, experience rules as a condition.
pub const ACTION_HELDITEM: Key<Json> = Key::new("helditem");
pub const ACTION_ARMORHELMET: Key<Json> = Key::new("armorhelmet");
pub const ACTION_ARMORCHEST: Key<Json> = Key::new("armorchest");
pub const ACTION_ARMORLEGS: Key<Json> = Key::new("armorlegs");
pub const ACTION_ARMORBOOTS: Key<Json> = Key::new("armorboots");
pub const ACTION_POTION: Key<String> = Key::new("potion");
