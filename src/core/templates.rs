//! Literal file payloads for the dashboard scaffold.
//!
//! These are opaque template text, written to disk verbatim. Nothing in here
//! is interpolated or validated; every constant ends with a trailing newline
//! so the emitted files match the upstream shadcn/ui boilerplate exactly.

/// Tailwind entry stylesheet with the shadcn/ui CSS variable themes.
pub const GLOBALS_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {
  :root {
    --background: 0 0% 100%;
    --foreground: 222.2 84% 4.9%;
    --card: 0 0% 100%;
    --card-foreground: 222.2 84% 4.9%;
    --popover: 0 0% 100%;
    --popover-foreground: 222.2 84% 4.9%;
    --primary: 221.2 83.2% 53.3%;
    --primary-foreground: 210 40% 98%;
    --secondary: 210 40% 96.1%;
    --secondary-foreground: 222.2 47.4% 11.2%;
    --muted: 210 40% 96.1%;
    --muted-foreground: 215.4 16.3% 46.9%;
    --accent: 210 40% 96.1%;
    --accent-foreground: 222.2 47.4% 11.2%;
    --destructive: 0 84.2% 60.2%;
    --destructive-foreground: 210 40% 98%;
    --border: 214.3 31.8% 91.4%;
    --input: 214.3 31.8% 91.4%;
    --ring: 221.2 83.2% 53.3%;
    --radius: 0.5rem;
  }

  .dark {
    --background: 222.2 84% 4.9%;
    --foreground: 210 40% 98%;
    --card: 222.2 84% 4.9%;
    --card-foreground: 210 40% 98%;
    --popover: 222.2 84% 4.9%;
    --popover-foreground: 210 40% 98%;
    --primary: 217.2 91.2% 59.8%;
    --primary-foreground: 222.2 47.4% 11.2%;
    --secondary: 217.2 32.6% 17.5%;
    --secondary-foreground: 210 40% 98%;
    --muted: 217.2 32.6% 17.5%;
    --muted-foreground: 215 20.2% 65.1%;
    --accent: 217.2 32.6% 17.5%;
    --accent-foreground: 210 40% 98%;
    --destructive: 0 62.8% 30.6%;
    --destructive-foreground: 210 40% 98%;
    --border: 217.2 32.6% 17.5%;
    --input: 217.2 32.6% 17.5%;
    --ring: 224.3 76.3% 48%;
  }
}

@layer base {
  * {
    @apply border-border;
  }
  body {
    @apply bg-background text-foreground;
  }
}
"#;

/// Class-name merge helper plus dashboard formatting utilities.
pub const LIB_UTILS_TS: &str = r#"import { type ClassValue, clsx } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}

export function formatDate(date: string | Date) {
  return new Date(date).toLocaleDateString('en-US', {
    year: 'numeric',
    month: 'short',
    day: 'numeric',
    hour: '2-digit',
    minute: '2-digit',
  })
}

export function getDeviceIcon(deviceType: string) {
  const icons: Record<string, string> = {
    light: '💡',
    door_lock: '🔒',
    temperature_sensor: '🌡️',
    motion_sensor: '👁️',
    smoke_detector: '🔥',
    rain_sensor: '🌧️',
    clothes_rack: '👕',
  };
  return icons[deviceType] || '📱';
}
"#;

/// Device domain types shared by every dashboard page.
pub const DEVICE_TYPES_TS: &str = r#"export type DeviceType =
  | 'light'
  | 'door_lock'
  | 'temperature_sensor'
  | 'motion_sensor'
  | 'smoke_detector'
  | 'rain_sensor'
  | 'clothes_rack';

export interface DeviceState {
  is_on?: boolean;
  is_locked?: boolean;
  temperature?: number;
  humidity?: number;
  motion_detected?: boolean;
  smoke_detected?: boolean;
  smoke_level?: number;
  is_raining?: boolean;
  rain_intensity?: number;
  last_rain_detected?: string;
  rack_position?: 'extended' | 'retracted' | 'stopped';
}

export interface Device {
  _id: string;
  name: string;
  device_type: DeviceType;
  mac_address: string;
  room_id?: string;
  user_id: string;
  status: 'online' | 'offline';
  state: DeviceState;
  mqtt_topic: string;
  is_active: boolean;
  last_updated: string;
  created_at: string;
  metadata?: {
    firmware_version?: string;
    ip_address?: string;
    signal_strength?: number;
    battery_level?: number;
  };
}
"#;

/// Advisory follow-up instructions printed after a successful run.
/// Opaque operator text, never executed.
pub const NEXT_STEPS: [&str; 4] = [
    "1. cd frontend-shadcn",
    "2. npm install",
    "3. npx shadcn@latest add button card input label",
    "4. npm run dev",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_end_with_newline() {
        for payload in [GLOBALS_CSS, LIB_UTILS_TS, DEVICE_TYPES_TS] {
            assert!(payload.ends_with('\n'));
            assert!(!payload.ends_with("\n\n"));
        }
    }

    #[test]
    fn stylesheet_defines_both_themes() {
        assert!(GLOBALS_CSS.starts_with("@tailwind base;\n"));
        assert!(GLOBALS_CSS.contains(":root {"));
        assert!(GLOBALS_CSS.contains(".dark {"));
    }
}
