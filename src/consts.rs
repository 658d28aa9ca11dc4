include!(concat!(env!("OUT_DIR"), "/consts.rs"));
