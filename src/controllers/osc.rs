// src/controllers/osc.rs
// OSC Controller
//
// Remote control surface: start, pause, mute and spawn.

use log::warn;
use nannou_osc as osc;
use std::error::Error;

use super::controls::ControlAction;

pub const ADDR_START: &str = "/anim/start";
pub const ADDR_PAUSE: &str = "/anim/pause";
pub const ADDR_MUTE: &str = "/anim/mute";
pub const ADDR_SPAWN: &str = "/anim/spawn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscCommand {
    Start,
    Pause,
    Mute,
    Spawn { count: usize },
}

impl OscCommand {
    /// The button this command stands in for, if any.
    pub fn action(&self) -> Option<ControlAction> {
        match self {
            OscCommand::Start => Some(ControlAction::Start),
            OscCommand::Pause => Some(ControlAction::Pause),
            OscCommand::Mute => Some(ControlAction::Mute),
            OscCommand::Spawn { .. } => None,
        }
    }
}

pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    match message.addr.as_str() {
        ADDR_START => Some(OscCommand::Start),
        ADDR_PAUSE => Some(OscCommand::Pause),
        ADDR_MUTE => Some(OscCommand::Mute),
        ADDR_SPAWN => match &message.args[..] {
            [] => Some(OscCommand::Spawn { count: 1 }),
            [osc::Type::Int(count)] if *count > 0 => Some(OscCommand::Spawn {
                count: *count as usize,
            }),
            _ => {
                warn!("Bad arguments for {}: {:?}", ADDR_SPAWN, message.args);
                None
            }
        },
        _ => {
            warn!("Unknown OSC address pattern: {}", message.addr);
            None
        }
    }
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                if let Some(command) = parse_message(&message) {
                    self.command_queue.push(command);
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_command(&self, command: &OscCommand) {
        let (addr, args) = match command {
            OscCommand::Start => (ADDR_START, vec![]),
            OscCommand::Pause => (ADDR_PAUSE, vec![]),
            OscCommand::Mute => (ADDR_MUTE, vec![]),
            OscCommand::Spawn { count } => (ADDR_SPAWN, vec![osc::Type::Int(*count as i32)]),
        };
        if let Err(e) = self.sender.send(
            (addr.to_string(), args),
            (self.target_addr.as_str(), self.target_port),
        ) {
            warn!("Failed to send {}: {}", addr, e);
        }
    }

    pub fn send_start(&self) {
        self.send_command(&OscCommand::Start);
    }

    pub fn send_pause(&self) {
        self.send_command(&OscCommand::Pause);
    }

    pub fn send_mute(&self) {
        self.send_command(&OscCommand::Mute);
    }

    pub fn send_spawn(&self, count: usize) {
        self.send_command(&OscCommand::Spawn { count });
    }
}
